//! Local image builds
//!
//! The engine reports the built image through an id file rather than on
//! stdout, so its build output can go straight to the operator's terminal.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::engine::{BuildRequest, Engine};
use crate::error::BuildError;
use crate::image::ImageId;
use crate::reference::LocalBuild;
use crate::temp;

/// Build `descriptor` with `workdir` as build context and return the image id.
///
/// The id file is removed on every exit path when its handle drops.
pub fn build_image(
    engine: &dyn Engine,
    descriptor: &LocalBuild,
    workdir: &Path,
) -> Result<ImageId, BuildError> {
    let iidfile = temp::image_id_file().map_err(|e| BuildError::ArtifactUnavailable {
        reason: e.to_string(),
    })?;

    let target = (!descriptor.target.is_empty()).then_some(descriptor.target.as_str());
    if target.is_none() {
        debug!("no build target given, the final stage will be built");
    }

    info!(
        build_file = %descriptor.build_file.display(),
        build_target = %descriptor.target,
        context = %workdir.display(),
        "building image"
    );
    engine
        .build(&BuildRequest {
            build_file: &descriptor.build_file,
            target,
            context_dir: workdir,
            iidfile: iidfile.path(),
        })
        .map_err(|source| BuildError::BuildFailed {
            build_file: descriptor.build_file.display().to_string(),
            target: descriptor.target.clone(),
            source,
        })?;

    let unreadable = |reason: String| BuildError::ArtifactUnreadable {
        path: iidfile.path().display().to_string(),
        reason,
    };
    let contents = fs::read_to_string(iidfile.path()).map_err(|e| unreadable(e.to_string()))?;
    let id = contents.trim();
    if id.is_empty() {
        return Err(unreadable("engine wrote no image id".to_string()));
    }

    debug!(image = id, "build finished");
    Ok(ImageId::new(id))
}
