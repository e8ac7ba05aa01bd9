//! Inspect with a single pull fallback
//!
//! `inspect` -> found: done. Not found -> `pull` once -> `inspect` once more,
//! whose outcome is final. Any other inspect failure ends the sequence at once.

use tracing::info;

use crate::engine::Engine;
use crate::error::FallbackError;
use crate::image::{ImageId, ImageMetadata};

/// Inspect `image`, pulling it first if the engine does not have it locally.
pub fn inspect_or_pull(
    engine: &dyn Engine,
    image: &ImageId,
) -> Result<ImageMetadata, FallbackError> {
    let inspect_failed = |source| FallbackError::InspectFailed {
        image: image.to_string(),
        source,
    };

    match engine.inspect(image) {
        Ok(metadata) => return Ok(metadata),
        Err(err) if err.is_not_found() => {
            info!(%image, "image not found locally, pulling");
        }
        Err(err) => return Err(inspect_failed(err)),
    }

    engine
        .pull(image)
        .map_err(|source| FallbackError::PullFailed {
            image: image.to_string(),
            source,
        })?;

    engine.inspect(image).map_err(inspect_failed)
}
