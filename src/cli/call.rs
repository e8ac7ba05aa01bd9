use clap::Parser;
use std::path::PathBuf;

/// Arguments for the call command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run an image, pulling it when missing:\n    docker call alpine:3.20 sh\n\n\
                  Build a stage of a local Dockerfile and run it:\n    docker call file://tools/Dockerfile#lint --fix\n\n\
                  Build from an absolute Dockerfile path:\n    docker call file:///opt/ci/Dockerfile#test\n\n\
                  Run against another directory:\n    docker call -w ../service ghcr.io/org/migrate:1 up")]
pub struct CallArgs {
    /// Work dir: build context, ${workdir} in mount labels, and cwd of the run
    /// (defaults to current directory)
    #[arg(long, short = 'w', value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Image reference (name, or file://<path>/Dockerfile#<target>) followed by
    /// arguments passed to the container verbatim
    #[arg(
        value_name = "REFERENCE",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub invocation: Vec<String>,
}

impl CallArgs {
    /// The image reference
    pub fn reference(&self) -> &str {
        self.invocation.first().map_or("", String::as_str)
    }

    /// Arguments after the reference, passed to the container
    pub fn args(&self) -> &[String] {
        self.invocation.get(1..).unwrap_or_default()
    }
}
