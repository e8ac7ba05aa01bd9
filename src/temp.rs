//! Scoped temporary files, always placed under an absolute temp directory so
//! they never land in the build context (e.g. when TMPDIR=tmp).

use std::env;
use std::io;
use std::path::PathBuf;

use tempfile::{Builder, NamedTempFile};

/// Prefix of the files the engine writes built image identifiers into
pub const IMAGE_ID_FILE_PREFIX: &str = "image-id-";

/// Returns a directory path suitable for creating temporary files.
/// Never returns a relative path.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Allocate a uniquely named, initially empty image id file.
///
/// The file is removed when the returned handle is dropped.
pub fn image_id_file() -> io::Result<NamedTempFile> {
    Builder::new()
        .prefix(IMAGE_ID_FILE_PREFIX)
        .tempfile_in(temp_dir_base())
}
