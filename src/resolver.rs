//! Reference resolution: turn whatever the user typed into an image id

use std::path::Path;

use tracing::debug;

use crate::build::build_image;
use crate::engine::Engine;
use crate::error::ResolveError;
use crate::image::ImageId;
use crate::reference::Reference;

/// Resolve `raw` to an image identifier.
///
/// Image names are returned unchanged (the engine validates them on inspect);
/// `file://` references are built first with `workdir` as context.
pub fn resolve(engine: &dyn Engine, raw: &str, workdir: &Path) -> Result<ImageId, ResolveError> {
    let reference = Reference::parse(raw).map_err(|source| ResolveError::Parse {
        reference: raw.to_string(),
        source,
    })?;
    debug!(%reference, "parsed reference");

    match reference {
        Reference::Direct { name } => Ok(ImageId::new(name)),
        Reference::LocalBuild(descriptor) => {
            build_image(engine, &descriptor, workdir).map_err(|source| ResolveError::Build {
                reference: raw.to_string(),
                source,
            })
        }
    }
}
