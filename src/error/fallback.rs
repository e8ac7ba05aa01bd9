//! Inspect / pull fallback errors

use miette::Diagnostic;
use thiserror::Error;

use super::EngineError;

/// Terminal failures of the inspect, pull, re-inspect sequence
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum FallbackError {
    #[error("Failed to pull image '{image}': {source}")]
    #[diagnostic(
        code(docker_call::fallback::pull_failed),
        help("Check the image name and that you are logged in to its registry")
    )]
    PullFailed {
        image: String,
        #[source]
        source: EngineError,
    },

    #[error("Failed to inspect image '{image}': {source}")]
    #[diagnostic(code(docker_call::fallback::inspect_failed))]
    InspectFailed {
        image: String,
        #[source]
        source: EngineError,
    },
}
