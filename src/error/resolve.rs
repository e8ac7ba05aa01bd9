//! Reference resolution errors

use miette::Diagnostic;
use thiserror::Error;

use super::{BuildError, ParseError};

/// A parse or build failure annotated with the reference the user typed
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Failed to get image '{reference}': {source}")]
    #[diagnostic(code(docker_call::resolve::parse))]
    Parse {
        reference: String,
        #[source]
        source: ParseError,
    },

    #[error("Failed to get image '{reference}': {source}")]
    #[diagnostic(code(docker_call::resolve::build))]
    Build {
        reference: String,
        #[source]
        source: BuildError,
    },
}

#[cfg(test)]
impl ResolveError {
    /// The raw reference that failed to resolve
    pub fn reference(&self) -> &str {
        match self {
            ResolveError::Parse { reference, .. } | ResolveError::Build { reference, .. } => {
                reference
            }
        }
    }
}
