//! Call command implementation
//!
//! resolve -> inspect (pull once if missing) -> derive flags -> run

use std::path::Path;

use tracing::debug;

use crate::cli::CallArgs;
use crate::config::{EngineConfig, resolve_workdir};
use crate::engine::{DockerCli, Engine};
use crate::error::{CallError, Result};
use crate::fallback::inspect_or_pull;
use crate::flags::derive_flags;
use crate::launch::{compose, launch};
use crate::resolver::resolve;

/// Run call command, returning the container's exit code
pub fn run(config: &EngineConfig, args: CallArgs) -> Result<i32> {
    let workdir = resolve_workdir(args.workdir.as_deref())?;
    let engine = DockerCli::new(config);
    execute(&engine, args.reference(), args.args(), &workdir)
}

/// The call pipeline against any engine
pub fn execute(
    engine: &dyn Engine,
    reference: &str,
    trailing: &[String],
    workdir: &Path,
) -> Result<i32> {
    let image = resolve(engine, reference, workdir)?;
    let metadata = inspect_or_pull(engine, &image)?;

    let flags = derive_flags(&metadata, workdir);
    debug!(image = %metadata.id, flags = flags.len(), "derived run flags");

    let invocation = compose(&metadata.id, flags, trailing, workdir);
    launch(engine, &invocation).map_err(|source| CallError::Launch {
        image: image.to_string(),
        source,
    })
}
