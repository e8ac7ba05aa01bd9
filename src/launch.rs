//! Composition and launch of the final interactive run

use std::path::{Path, PathBuf};

use tracing::info;

use crate::engine::{Engine, RunRequest};
use crate::error::EngineError;
use crate::flags::RunFlags;
use crate::image::ImageId;

/// Leading engine arguments of every run
pub const RUN_PREAMBLE: [&str; 3] = ["run", "--rm", "-it"];

/// A composed engine run: arguments plus the directory it starts in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub args: Vec<String>,
    pub workdir: PathBuf,
}

/// Compose `run --rm -it <flags> <image> <trailing args>`.
///
/// `image` should be the inspected identifier so the run starts exactly the
/// image whose labels produced `flags`.
pub fn compose(image: &ImageId, flags: RunFlags, trailing: &[String], workdir: &Path) -> Invocation {
    let mut args: Vec<String> = RUN_PREAMBLE.iter().map(ToString::to_string).collect();
    args.extend(flags.into_args());
    args.push(image.to_string());
    args.extend_from_slice(trailing);

    Invocation {
        args,
        workdir: workdir.to_path_buf(),
    }
}

/// Run the invocation attached to the terminal and return its exit code.
pub fn launch(engine: &dyn Engine, invocation: &Invocation) -> Result<i32, EngineError> {
    info!(workdir = %invocation.workdir.display(), "starting container");
    engine.run(&RunRequest {
        args: &invocation.args,
        workdir: &invocation.workdir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::RunFlag;
    use crate::test_fixtures::StubEngine;

    fn workdir_flags() -> RunFlags {
        let mut flags = RunFlags::default();
        flags.push(RunFlag::Env {
            key: "workdir".to_string(),
            value: "/w".to_string(),
        });
        flags
    }

    #[test]
    fn test_compose_order() {
        let mut flags = RunFlags::default();
        flags.push(RunFlag::Network("host".to_string()));
        flags.push(RunFlag::Env {
            key: "workdir".to_string(),
            value: "/w".to_string(),
        });
        let trailing = vec!["sh".to_string(), "-c".to_string(), "echo hi".to_string()];

        let invocation = compose(&ImageId::new("sha256:abc"), flags, &trailing, Path::new("/w"));

        assert_eq!(
            invocation.args,
            vec![
                "run",
                "--rm",
                "-it",
                "--network",
                "host",
                "-e",
                "workdir=/w",
                "sha256:abc",
                "sh",
                "-c",
                "echo hi"
            ]
        );
        assert_eq!(invocation.workdir, PathBuf::from("/w"));
    }

    #[test]
    fn test_compose_trailing_args_after_image_verbatim() {
        let trailing = vec!["--rm".to_string(), "-e".to_string(), "X=1".to_string()];

        let invocation = compose(&ImageId::new("img"), workdir_flags(), &trailing, Path::new("/w"));

        let image_at = invocation.args.iter().position(|a| a == "img").unwrap();
        assert_eq!(&invocation.args[image_at + 1..], trailing.as_slice());
    }

    #[test]
    fn test_launch_returns_engine_exit_code() {
        let engine = StubEngine::new().with_run_exit(42);
        let invocation = compose(&ImageId::new("img"), workdir_flags(), &[], Path::new("/w"));

        assert_eq!(launch(&engine, &invocation).unwrap(), 42);

        let runs = engine.runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].args, invocation.args);
        assert_eq!(runs[0].workdir, PathBuf::from("/w"));
    }
}
