//! docker-call - Docker CLI plugin that runs images the way their labels ask
//!
//! `docker call <reference> [args...]` resolves the reference (building a
//! local Dockerfile target when given `file://<path>#<target>`), pulls the
//! image if it is missing, and runs it interactively with the mounts, ports,
//! network and volumes declared in its `com.docker.runtime` labels.

use clap::Parser;

mod build;
mod cli;
mod commands;
mod config;
mod engine;
mod error;
mod fallback;
mod flags;
mod image;
mod launch;
mod logging;
mod reference;
mod resolver;
mod temp;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::EngineConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.global.debug);

    let config = EngineConfig::from_cli(&cli);
    let result = match cli.command {
        Commands::Call(args) => commands::call::run(&config, args),
        Commands::PluginMetadata => commands::plugin_metadata::run().map(|()| 0),
        Commands::Version => commands::version::run().map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
