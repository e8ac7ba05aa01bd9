//! Run flags derived from image labels and declared volumes
//!
//! Labels under [`LABEL_PREFIX`]:
//!
//! | label                               | flag                    |
//! |-------------------------------------|-------------------------|
//! | `com.docker.runtime.mounts.<any>`   | `--mount <value>`       |
//! | `com.docker.runtime.ports.<any>`    | `-p <value>`            |
//! | `com.docker.runtime.network`        | `--network <value>`     |
//!
//! Mount values may reference the working directory as `$workdir` or
//! `${workdir}`. Every declared volume gets a named volume scoped to the
//! working directory, and `-e workdir=<dir>` always comes last.

use std::path::Path;

use sha1::{Digest, Sha1};

use crate::image::ImageMetadata;

/// Label namespace read by docker-call
pub const LABEL_PREFIX: &str = "com.docker.runtime";

/// Prefix of the named volumes created for declared volumes
pub const VOLUME_ID_PREFIX: &str = "action-";

/// Variable name substituted in mount values and exported to the container
pub const WORKDIR_VAR: &str = "workdir";

/// A single engine run flag with its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunFlag {
    Mount(String),
    Publish(String),
    Network(String),
    Volume { name: String, path: String },
    Env { key: String, value: String },
}

impl RunFlag {
    /// The flag as two engine arguments
    pub fn to_args(&self) -> [String; 2] {
        match self {
            RunFlag::Mount(spec) => ["--mount".to_string(), spec.clone()],
            RunFlag::Publish(spec) => ["-p".to_string(), spec.clone()],
            RunFlag::Network(name) => ["--network".to_string(), name.clone()],
            RunFlag::Volume { name, path } => ["-v".to_string(), format!("{name}:{path}")],
            RunFlag::Env { key, value } => ["-e".to_string(), format!("{key}={value}")],
        }
    }
}

/// Ordered run flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFlags(Vec<RunFlag>);

impl RunFlags {
    pub fn push(&mut self, flag: RunFlag) {
        self.0.push(flag);
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &RunFlag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Flatten into engine arguments, preserving order
    pub fn into_args(self) -> Vec<String> {
        self.0.iter().flat_map(RunFlag::to_args).collect()
    }
}

/// Derive the run flags for an inspected image.
///
/// Labels outside the runtime namespace are ignored. Relative order among
/// label-derived flags is unspecified; volumes follow them and the workdir
/// environment flag is always last.
pub fn derive_flags(metadata: &ImageMetadata, workdir: &Path) -> RunFlags {
    let workdir_value = workdir.to_string_lossy();
    let mounts_prefix = format!("{LABEL_PREFIX}.mounts.");
    let ports_prefix = format!("{LABEL_PREFIX}.ports.");
    let network_label = format!("{LABEL_PREFIX}.network");

    let mut flags = RunFlags::default();
    for (label, value) in &metadata.labels {
        if label.starts_with(&mounts_prefix) {
            let spec = expand(value, |name| {
                if name == WORKDIR_VAR {
                    workdir_value.to_string()
                } else {
                    name.to_string()
                }
            });
            flags.push(RunFlag::Mount(spec));
        } else if label.starts_with(&ports_prefix) {
            flags.push(RunFlag::Publish(value.clone()));
        } else if *label == network_label {
            flags.push(RunFlag::Network(value.clone()));
        }
    }

    for path in &metadata.declared_volumes {
        flags.push(RunFlag::Volume {
            name: volume_identity(workdir, path),
            path: path.clone(),
        });
    }

    flags.push(RunFlag::Env {
        key: WORKDIR_VAR.to_string(),
        value: workdir_value.into_owned(),
    });
    flags
}

/// Named volume for `path` scoped to `workdir`: `action-` followed by the
/// lowercase hex SHA-1 of the workdir bytes immediately followed by the path
/// bytes. Stable across runs, so state persists per working directory.
pub fn volume_identity(workdir: &Path, path: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(workdir.as_os_str().as_encoded_bytes());
    hasher.update(path.as_bytes());
    format!("{VOLUME_ID_PREFIX}{}", hex::encode(hasher.finalize()))
}

/// Replace `$name` and `${name}` references in `input` using `mapping`.
///
/// Names are alphanumerics and underscores, or a single special character
/// (`*#$@!?-` or a digit). `${}` and an unterminated `${` are dropped; a `$`
/// that starts no name is kept as is.
pub fn expand(input: &str, mut mapping: impl FnMut(&str) -> String) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' && i + 1 < bytes.len() {
            out.push_str(&input[copied..i]);
            let (name, width) = variable_name(&input[i + 1..]);
            if !name.is_empty() {
                out.push_str(&mapping(name));
            } else if width == 0 {
                out.push('$');
            }
            i += width;
            copied = i + 1;
        }
        i += 1;
    }
    out.push_str(&input[copied..]);
    out
}

/// Name at the start of `s` (which follows a `$`) and how many bytes it spans
fn variable_name(s: &str) -> (&str, usize) {
    let bytes = s.as_bytes();
    if bytes[0] == b'{' {
        if bytes.len() > 2 && is_special_var(bytes[1]) && bytes[2] == b'}' {
            return (&s[1..2], 3);
        }
        return match bytes[1..].iter().position(|&b| b == b'}') {
            Some(0) => ("", 2),
            Some(end) => (&s[1..=end], end + 2),
            None => ("", 1),
        };
    }
    if is_special_var(bytes[0]) {
        return (&s[..1], 1);
    }
    let len = bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count();
    (&s[..len], len)
}

fn is_special_var(b: u8) -> bool {
    matches!(b, b'*' | b'#' | b'$' | b'@' | b'!' | b'?' | b'-') || b.is_ascii_digit()
}
