//! Reference parsing errors

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while parsing an image reference
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed image reference '{reference}': {reason}")]
    #[diagnostic(
        code(docker_call::reference::malformed),
        help("Valid formats: alpine:3.20, ghcr.io/org/app@sha256:..., file://dir/Dockerfile#target")
    )]
    Malformed { reference: String, reason: String },

    #[error("Unsupported scheme: {scheme}")]
    #[diagnostic(
        code(docker_call::reference::unsupported_scheme),
        help("Only file:// references are built locally; use a plain image name for anything else")
    )]
    UnsupportedScheme { scheme: String },
}

/// Creates a malformed reference error
pub fn malformed(reference: impl Into<String>, reason: impl Into<String>) -> ParseError {
    ParseError::Malformed {
        reference: reference.into(),
        reason: reason.into(),
    }
}

/// Creates an unsupported scheme error
pub fn unsupported_scheme(scheme: impl Into<String>) -> ParseError {
    ParseError::UnsupportedScheme {
        scheme: scheme.into(),
    }
}
