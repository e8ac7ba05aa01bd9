//! Local build errors

use miette::Diagnostic;
use thiserror::Error;

use super::EngineError;

/// Errors produced while building an image from a local build file
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Failed to build '{build_file}' (target '{target}'): {source}")]
    #[diagnostic(
        code(docker_call::build::failed),
        help("The build output above shows why the engine rejected the build")
    )]
    BuildFailed {
        build_file: String,
        target: String,
        #[source]
        source: EngineError,
    },

    #[error("Failed to read image id from '{path}': {reason}")]
    #[diagnostic(code(docker_call::build::artifact_unreadable))]
    ArtifactUnreadable { path: String, reason: String },

    #[error("Failed to create image id file: {reason}")]
    #[diagnostic(code(docker_call::build::artifact_unavailable))]
    ArtifactUnavailable { reason: String },
}
