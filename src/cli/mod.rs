//! CLI definitions using clap derive API
//!
//! This module is organized into submodules:
//! - global: Docker CLI global options forwarded to the plugin
//! - call: `call` command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod call;
pub mod global;

pub use call::CallArgs;
pub use global::GlobalArgs;

/// docker-call - run images configured by their own labels
///
/// Docker CLI plugin: `docker call <reference>` builds or pulls an image and
/// runs it interactively with mounts, ports and network taken from its labels.
#[derive(Parser, Debug)]
#[command(
    name = "docker-call",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build or pull an image and run it with the flags its labels declare",
    long_about = "docker-call resolves an image reference (an image name, or a local Dockerfile \
                  and build target written as file://<path>#<target>), pulls the image when it is \
                  missing, and runs it interactively with the mounts, ports, network and volumes \
                  declared under the com.docker.runtime label namespace.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  docker call alpine:3.20 sh                  \x1b[90m# Pull if missing, then run\x1b[0m\n   \
                  docker call file://tools/Dockerfile#lint    \x1b[90m# Build the lint stage, then run\x1b[0m\n   \
                  docker call -w ../app ghcr.io/org/task:1    \x1b[90m# Run against another directory\x1b[0m\n"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Docker CLI used to build, pull, inspect and run images
    #[arg(
        long,
        env = "DOCKER_CLI_PLUGIN_ORIGINAL_CLI_COMMAND",
        default_value = "docker",
        hide = true
    )]
    pub engine: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build or pull an image and run it with the flags declared in its labels
    Call(CallArgs),

    /// Print Docker CLI plugin metadata
    #[command(name = "docker-cli-plugin-metadata", hide = true)]
    PluginMetadata,

    /// Show version information
    #[command(hide = true)]
    Version,
}
