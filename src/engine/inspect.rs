//! Parsing of `docker image inspect` output

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::image::{ImageId, ImageMetadata};

/// One element of the JSON array printed by `docker image inspect`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectDocument {
    id: String,
    #[serde(default)]
    config: Option<ImageConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ImageConfig {
    #[serde(default)]
    labels: Option<BTreeMap<String, String>>,
    #[serde(default)]
    volumes: Option<BTreeMap<String, serde_json::Value>>,
}

impl From<InspectDocument> for ImageMetadata {
    fn from(doc: InspectDocument) -> Self {
        let config = doc.config.unwrap_or_default();
        ImageMetadata {
            id: ImageId::new(doc.id),
            labels: config.labels.unwrap_or_default(),
            declared_volumes: config
                .volumes
                .map(|volumes| volumes.into_keys().collect())
                .unwrap_or_default(),
        }
    }
}

/// Parse inspect output for a single image.
pub fn parse_inspect_output(stdout: &str) -> Result<ImageMetadata, String> {
    let documents: Vec<InspectDocument> =
        serde_json::from_str(stdout).map_err(|e| format!("invalid inspect JSON: {e}"))?;

    documents
        .into_iter()
        .next()
        .map(ImageMetadata::from)
        .ok_or_else(|| "inspect returned no images".to_string())
}
