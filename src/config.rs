//! Invocation configuration
//!
//! Everything the pipeline needs from the outside world is collected here once,
//! from the parsed command line (and the environment clap reads for it), and
//! then passed down explicitly.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{CallError, Result};

/// How to reach the container engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Engine CLI program
    pub program: PathBuf,
    /// Docker global flags placed before every engine subcommand
    pub global_flags: Vec<String>,
}

impl EngineConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            program: cli.engine.clone(),
            global_flags: cli.global.to_args(),
        }
    }
}

/// Absolute working directory for the invocation.
///
/// An explicit directory is made absolute against the process cwd without
/// resolving symlinks; without one the process cwd is used.
pub fn resolve_workdir(explicit: Option<&Path>) -> Result<PathBuf> {
    let workdir = match explicit {
        Some(dir) => std::path::absolute(dir),
        None => std::env::current_dir(),
    };
    workdir.map_err(|e| CallError::Workdir {
        reason: e.to_string(),
    })
}
