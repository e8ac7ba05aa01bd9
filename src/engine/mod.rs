//! External container engine capability
//!
//! The core never talks to a daemon itself. It asks an [`Engine`] to inspect,
//! pull, build and run images; [`DockerCli`] is the implementation that drives
//! the host `docker` binary, tests substitute stubs.

pub mod docker;
pub mod inspect;

use std::path::Path;

use crate::error::EngineError;
use crate::image::{ImageId, ImageMetadata};

pub use docker::DockerCli;

/// Arguments for a local build
#[derive(Debug, Clone, Copy)]
pub struct BuildRequest<'a> {
    pub build_file: &'a Path,
    /// Omitted from the engine invocation when `None`
    pub target: Option<&'a str>,
    /// Build context directory, also the cwd of the build
    pub context_dir: &'a Path,
    /// File the engine writes the built image identifier into
    pub iidfile: &'a Path,
}

/// A fully composed interactive run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest<'a> {
    /// Engine arguments, starting with the `run` subcommand
    pub args: &'a [String],
    pub workdir: &'a Path,
}

/// Operations the core needs from the host container engine
pub trait Engine {
    /// Read an image's configuration. A locally missing image is reported as
    /// [`EngineError::NotFound`].
    fn inspect(&self, image: &ImageId) -> Result<ImageMetadata, EngineError>;

    /// Pull an image, streaming progress to the operator's stderr.
    fn pull(&self, image: &ImageId) -> Result<(), EngineError>;

    /// Build an image, streaming build output to the operator's stderr.
    fn build(&self, request: &BuildRequest<'_>) -> Result<(), EngineError>;

    /// Run attached to the operator's terminal and return the exit code.
    fn run(&self, request: &RunRequest<'_>) -> Result<i32, EngineError>;
}
