//! Errors reported by the external container engine

use miette::Diagnostic;
use thiserror::Error;

/// Failure of a single engine invocation (inspect, pull, build or run)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("No such image: {image}")]
    #[diagnostic(code(docker_call::engine::not_found))]
    NotFound { image: String },

    #[error("'{command}' failed: {reason}")]
    #[diagnostic(code(docker_call::engine::command_failed))]
    CommandFailed { command: String, reason: String },

    #[error("Failed to execute '{program}': {reason}")]
    #[diagnostic(
        code(docker_call::engine::spawn_failed),
        help("Check that the docker CLI is installed and on PATH")
    )]
    Spawn { program: String, reason: String },

    #[error("Unexpected output from '{command}': {reason}")]
    #[diagnostic(code(docker_call::engine::invalid_output))]
    InvalidOutput { command: String, reason: String },
}

impl EngineError {
    /// Whether the engine reported the image as missing locally
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. })
    }
}

/// Creates a command failed error
pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> EngineError {
    EngineError::CommandFailed {
        command: command.into(),
        reason: reason.into(),
    }
}

/// Creates an image not found error
pub fn not_found(image: impl Into<String>) -> EngineError {
    EngineError::NotFound {
        image: image.into(),
    }
}
