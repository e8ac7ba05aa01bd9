//! Docker CLI plugin handshake
//!
//! The Docker CLI discovers plugins by running `docker-<name>
//! docker-cli-plugin-metadata` and reading a JSON object from stdout.

use serde::Serialize;

use crate::error::Result;

/// Metadata schema version understood by the Docker CLI
pub const SCHEMA_VERSION: &str = "0.1.0";

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PluginMetadata {
    pub schema_version: &'static str,
    pub vendor: &'static str,
    pub version: &'static str,
    pub short_description: &'static str,
}

pub fn metadata() -> PluginMetadata {
    PluginMetadata {
        schema_version: SCHEMA_VERSION,
        vendor: "Sergei Egorov",
        version: env!("CARGO_PKG_VERSION"),
        short_description: "Build or pull an image and run it with the flags its labels declare",
    }
}

/// Print the metadata JSON
pub fn run() -> Result<()> {
    let json = serde_json::to_string(&metadata())?;
    println!("{json}");
    Ok(())
}
