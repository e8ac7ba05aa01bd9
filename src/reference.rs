//! Image reference parsing
//!
//! A reference is either an image name the engine understands as-is, or a
//! local build written as a `file://` URI whose fragment names the build target:
//! - `alpine:3.20`, `ghcr.io/org/app@sha256:...` - image names, passed through
//! - `file://relative/dir/Dockerfile#stage` - build file relative to the workdir
//! - `file:///abs/Dockerfile#stage` - absolute build file
//!
//! `scheme://...` always carries a scheme. A bare `name:rest` carries one only
//! when `rest` cannot be a tag or a registry port, so `alpine:3.20`,
//! `localhost:5000/app` and `sha256:<hex>` stay image names while
//! `file:/abs/Dockerfile#stage` is a local build. Parsing is purely syntactic:
//! nothing is normalized and no file is checked for existence.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ParseError;
use crate::error::reference::{malformed, unsupported_scheme};

/// Scheme that selects a local build
pub const LOCAL_BUILD_SCHEME: &str = "file";

/// A parsed image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// Image name, tag or digest handed to the engine unchanged
    Direct { name: String },
    /// Build file and target to build before running
    LocalBuild(LocalBuild),
}

/// Build file and target parsed from a `file://` reference.
///
/// The build context is not part of the reference; it is the working
/// directory of the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBuild {
    /// URI authority joined with the URI path
    pub build_file: PathBuf,
    /// Decoded URI fragment; empty when the reference has none
    pub target: String,
}

impl Reference {
    /// Parse a reference string
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.is_empty() {
            return Err(malformed(raw, "reference is empty"));
        }
        if raw.chars().any(|c| c.is_ascii_control()) {
            return Err(malformed(raw, "invalid control character in reference"));
        }

        let Some(split) = split_scheme(raw)? else {
            return Ok(Reference::Direct {
                name: raw.to_string(),
            });
        };

        let scheme = split.scheme.to_ascii_lowercase();
        if scheme != LOCAL_BUILD_SCHEME {
            return Err(unsupported_scheme(scheme));
        }

        LocalBuild::from_uri_parts(raw, &split).map(Reference::LocalBuild)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Direct { name } => f.write_str(name),
            Reference::LocalBuild(build) => write!(
                f,
                "{}://{}#{}",
                LOCAL_BUILD_SCHEME,
                build.build_file.display(),
                build.target
            ),
        }
    }
}

impl LocalBuild {
    fn from_uri_parts(raw: &str, split: &SchemeSplit<'_>) -> Result<Self, ParseError> {
        let (location, fragment) = match split.rest.split_once('#') {
            Some((location, fragment)) => (location, Some(fragment)),
            None => (split.rest, None),
        };
        // query parameters carry no meaning for a build file
        let location = location.split_once('?').map_or(location, |(l, _)| l);

        let (authority, path) = if split.has_authority {
            match location.find('/') {
                Some(idx) => location.split_at(idx),
                None => (location, ""),
            }
        } else {
            ("", location)
        };
        let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

        let decode = |part: &str| percent_decode(part).map_err(|reason| malformed(raw, reason));
        let host = decode(host)?;
        let path = decode(path)?;
        let target = fragment.map(decode).transpose()?.unwrap_or_default();

        let build_file = join_authority(&host, &path);
        if build_file.as_os_str().is_empty() {
            return Err(malformed(raw, "missing build file path"));
        }

        Ok(Self { build_file, target })
    }
}

/// A reference split after its scheme
struct SchemeSplit<'a> {
    scheme: &'a str,
    /// Everything after `scheme:` (and after `//` when there is an authority)
    rest: &'a str,
    /// Written as `scheme://authority/path`
    has_authority: bool,
}

/// Split off the scheme. `None` means the input is an image name.
fn split_scheme(raw: &str) -> Result<Option<SchemeSplit<'_>>, ParseError> {
    let Some((scheme, rest)) = raw.split_once(':') else {
        return Ok(None);
    };

    if let Some(rest) = rest.strip_prefix("//") {
        if scheme.is_empty() {
            return Err(malformed(raw, "missing protocol scheme"));
        }
        // "://" after a path separator belongs to the image path, not a scheme
        if scheme.contains('/') {
            return Ok(None);
        }
        if !is_valid_scheme(scheme) {
            return Err(malformed(raw, format!("invalid scheme '{scheme}'")));
        }
        return Ok(Some(SchemeSplit {
            scheme,
            rest,
            has_authority: true,
        }));
    }

    if is_valid_scheme(scheme) && !is_tag_or_port(rest) {
        return Ok(Some(SchemeSplit {
            scheme,
            rest,
            has_authority: false,
        }));
    }
    Ok(None)
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Whether the text after `name:` reads as an image tag or digest (no `/` or
/// `#`) or as a registry port (`5000` or `5000/...`)
fn is_tag_or_port(rest: &str) -> bool {
    if rest.starts_with('/') {
        return false;
    }
    let port_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if port_len > 0 && rest.as_bytes().get(port_len).is_none_or(|&b| b == b'/') {
        return true;
    }
    !rest.contains(['/', '#'])
}

fn join_authority(host: &str, path: &str) -> PathBuf {
    let relative = path.trim_start_matches('/');
    if host.is_empty() {
        PathBuf::from(path)
    } else if relative.is_empty() {
        PathBuf::from(host)
    } else {
        Path::new(host).join(relative)
    }
}

fn percent_decode(input: &str) -> Result<String, String> {
    if let Some(escape) = invalid_escape(input) {
        return Err(format!("invalid URL escape \"{escape}\""));
    }
    urlencoding::decode(input)
        .map(Cow::into_owned)
        .map_err(|_| "escaped bytes are not valid UTF-8".to_string())
}

/// The first `%` not followed by two hex digits, with what follows it
fn invalid_escape(input: &str) -> Option<&str> {
    input.match_indices('%').find_map(|(idx, _)| {
        let tail = &input[idx..];
        match tail.as_bytes().get(1..3) {
            Some(digits) if digits.iter().all(u8::is_ascii_hexdigit) => None,
            _ => Some(tail.get(..3).unwrap_or(tail)),
        }
    })
}
