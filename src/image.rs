//! Image identifiers and the metadata read back from the engine

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Opaque string the engine uses to address an image: a name, a tag or a digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only snapshot of an inspected image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageMetadata {
    /// Identifier reported by the engine (usually `sha256:...`)
    pub id: ImageId,
    /// `Config.Labels`
    pub labels: BTreeMap<String, String>,
    /// Keys of `Config.Volumes`
    pub declared_volumes: BTreeSet<String>,
}

#[cfg(test)]
impl ImageMetadata {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ImageId::new(id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_volume(mut self, path: impl Into<String>) -> Self {
        self.declared_volumes.insert(path.into());
        self
    }
}
