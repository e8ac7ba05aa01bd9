//! Common test utilities for docker-call integration tests
//!
//! [`TestWorkspace`] owns a temp directory with a `work/` directory for the
//! invocation and, on unix, a fake `docker` script standing in for the engine.
//! The script appends each argv to `state/calls.log` and behaves like:
//!
//! - `image inspect`: prints one image once `state/present` exists,
//!   otherwise "No such image" and exit 1
//! - `pull`: creates `state/present` (exit 1 when `FAKE_DOCKER_PULL_FAIL` is set)
//! - `build`: writes `sha256:built` into the `--iidfile` and creates `state/present`
//! - `run`: records its cwd in `state/run.cwd` and exits with `FAKE_DOCKER_EXIT`

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Engine variable the Docker CLI sets when it launches a plugin
pub const ENGINE_ENV: &str = "DOCKER_CLI_PLUGIN_ORIGINAL_CLI_COMMAND";

#[cfg(unix)]
const FAKE_DOCKER: &str = r#"#!/bin/sh
state="$FAKE_DOCKER_STATE"
echo "$*" >> "$state/calls.log"

while [ $# -gt 0 ]; do
  case "$1" in
    --*=*|--debug|--tls|--tlsverify) shift ;;
    *) break ;;
  esac
done

case "$1" in
  image)
    if [ -f "$state/present" ]; then
      printf '[{"Id":"sha256:fake","Config":{"Labels":{"com.docker.runtime.network":"host","com.docker.runtime.mounts.src":"type=bind,source=${workdir},target=/src"},"Volumes":{"/data":{}}}}]\n'
      exit 0
    fi
    echo "Error response from daemon: No such image: $3" >&2
    exit 1
    ;;
  pull)
    if [ -n "$FAKE_DOCKER_PULL_FAIL" ]; then
      echo "pull access denied for $2" >&2
      exit 1
    fi
    echo "Pulling $2"
    touch "$state/present"
    exit 0
    ;;
  build)
    while [ $# -gt 0 ]; do
      if [ "$1" = "--iidfile" ]; then
        printf 'sha256:built\n' > "$2"
      fi
      shift
    done
    touch "$state/present"
    exit 0
    ;;
  run)
    pwd > "$state/run.cwd"
    exit "${FAKE_DOCKER_EXIT:-0}"
    ;;
esac

echo "unexpected docker invocation: $*" >&2
exit 2
"#;

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Working directory passed to docker-call
    pub workdir: PathBuf,
    /// Where the fake engine keeps its state
    pub state: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let workdir = temp.path().join("work");
        let state = temp.path().join("state");
        std::fs::create_dir_all(&workdir).expect("Failed to create work directory");
        std::fs::create_dir_all(&state).expect("Failed to create state directory");
        Self {
            temp,
            workdir,
            state,
        }
    }

    /// Write the fake engine script and return its path
    #[cfg(unix)]
    pub fn install_fake_docker(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.temp.path().join("docker");
        std::fs::write(&path, FAKE_DOCKER).expect("Failed to write fake docker");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake docker executable");
        path
    }

    /// Mark the image as already present in the fake engine
    pub fn mark_image_present(&self) {
        std::fs::write(self.state.join("present"), "").expect("Failed to mark image present");
    }

    /// Engine invocations recorded so far, one argv per line
    pub fn engine_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.state.join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Directory the fake engine's `run` started in
    pub fn run_cwd(&self) -> Option<PathBuf> {
        std::fs::read_to_string(self.state.join("run.cwd"))
            .ok()
            .map(|cwd| PathBuf::from(cwd.trim()))
    }

    /// Write a file in the working directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.workdir.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// docker-call command wired to the fake engine
    #[cfg(unix)]
    pub fn call_cmd(&self) -> Command {
        let mut cmd = docker_call_cmd();
        cmd.env(ENGINE_ENV, self.install_fake_docker())
            .env("FAKE_DOCKER_STATE", &self.state)
            .env_remove("FAKE_DOCKER_EXIT")
            .env_remove("FAKE_DOCKER_PULL_FAIL")
            .env_remove("RUST_LOG")
            .current_dir(&self.workdir);
        cmd
    }
}

/// docker-call command with no engine configured
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn docker_call_cmd() -> Command {
    Command::cargo_bin("docker-call").expect("docker-call binary should be built")
}
