//! Error types and handling for docker-call
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by pipeline stage:
//! - [`reference`]: Reference parsing errors
//! - [`build`]: Local build errors
//! - [`resolve`]: Resolution errors (parse or build, with the raw reference)
//! - [`fallback`]: Inspect / pull fallback errors
//! - [`engine`]: Failures reported by the external engine

pub mod build;
pub mod engine;
pub mod fallback;
pub mod reference;
pub mod resolve;

pub use build::BuildError;
pub use engine::EngineError;
pub use fallback::FallbackError;
pub use reference::ParseError;
pub use resolve::ResolveError;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for a `docker call` invocation
#[derive(Error, Diagnostic, Debug)]
pub enum CallError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Fallback(#[from] FallbackError),

    #[error("Failed to determine working directory: {reason}")]
    #[diagnostic(
        code(docker_call::workdir::unavailable),
        help("Pass an existing directory with --workdir")
    )]
    Workdir { reason: String },

    #[error("Failed to run image '{image}': {source}")]
    #[diagnostic(code(docker_call::launch::failed))]
    Launch {
        image: String,
        #[source]
        source: EngineError,
    },

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(docker_call::serialization))]
    Serialization { message: String },
}

impl From<serde_json::Error> for CallError {
    fn from(err: serde_json::Error) -> Self {
        CallError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CallError>;
