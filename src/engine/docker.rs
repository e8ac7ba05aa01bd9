//! Engine backed by the host `docker` CLI
//!
//! Every invocation is `<program> <global flags> <subcommand> ...`. The global
//! flags are the ones the Docker CLI handed to the plugin, so the engine talks
//! to the same daemon, context and TLS setup as the `docker` command that
//! launched us.

use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use super::inspect::parse_inspect_output;
use super::{BuildRequest, Engine, RunRequest};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::error::engine::{command_failed, not_found};
use crate::image::{ImageId, ImageMetadata};

/// Messages engines print when an image is absent from the local store
const NOT_FOUND_MARKERS: [&str; 2] = ["no such image", "image not known"];

#[derive(Debug, Clone)]
pub struct DockerCli {
    program: PathBuf,
    global_flags: Vec<String>,
}

impl DockerCli {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            program: config.program.clone(),
            global_flags: config.global_flags.clone(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.global_flags);
        cmd
    }

    fn describe(&self, subcommand: &str) -> String {
        format!("{} {}", self.program.display(), subcommand)
    }

    fn spawn_error(&self, err: &io::Error) -> EngineError {
        EngineError::Spawn {
            program: self.program.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Run a command whose output belongs on the operator's stderr
    fn run_forwarded(&self, mut cmd: Command, subcommand: &str) -> Result<(), EngineError> {
        cmd.stdin(Stdio::null())
            .stdout(io::stderr())
            .stderr(Stdio::inherit());
        debug!(command = ?cmd, "invoking engine");

        let status = cmd.status().map_err(|e| self.spawn_error(&e))?;
        if status.success() {
            Ok(())
        } else {
            Err(command_failed(self.describe(subcommand), status.to_string()))
        }
    }
}

impl Engine for DockerCli {
    fn inspect(&self, image: &ImageId) -> Result<ImageMetadata, EngineError> {
        let mut cmd = self.command();
        cmd.args(["image", "inspect", image.as_str()])
            .stdin(Stdio::null());
        debug!(command = ?cmd, "invoking engine");

        let output = cmd.output().map_err(|e| self.spawn_error(&e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if is_not_found_message(&stderr) {
                return Err(not_found(image.as_str()));
            }
            return Err(command_failed(
                self.describe("image inspect"),
                failure_reason(output.status, &stderr),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_inspect_output(&stdout).map_err(|reason| EngineError::InvalidOutput {
            command: self.describe("image inspect"),
            reason,
        })
    }

    fn pull(&self, image: &ImageId) -> Result<(), EngineError> {
        let mut cmd = self.command();
        cmd.args(["pull", image.as_str()]);
        self.run_forwarded(cmd, "pull")
    }

    fn build(&self, request: &BuildRequest<'_>) -> Result<(), EngineError> {
        let mut cmd = self.command();
        cmd.arg("build")
            .arg("-f")
            .arg(request.build_file)
            .arg("--iidfile")
            .arg(request.iidfile);
        if let Some(target) = request.target {
            cmd.args(["--target", target]);
        }
        cmd.arg(request.context_dir).current_dir(request.context_dir);
        self.run_forwarded(cmd, "build")
    }

    fn run(&self, request: &RunRequest<'_>) -> Result<i32, EngineError> {
        let mut cmd = self.command();
        cmd.args(request.args)
            .current_dir(request.workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        debug!(command = ?cmd, "invoking engine");

        let status = cmd.status().map_err(|e| self.spawn_error(&e))?;
        Ok(exit_code(status))
    }
}

fn is_not_found_message(stderr: &str) -> bool {
    let lower = stderr.to_ascii_lowercase();
    NOT_FOUND_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn failure_reason(status: ExitStatus, stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        status.to_string()
    } else {
        stderr.to_string()
    }
}

/// Exit code to propagate for a finished child; signals map to 128+N on unix
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
