//! Request path handling shared by the file operations

use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a request path
///
/// Repeated separators and trailing slashes collapse and `.` components are
/// dropped. `..` is kept and nothing is resolved against the filesystem. An
/// empty result is the current directory.
pub fn normalize_path(raw: &str) -> PathBuf {
    let normalized: PathBuf = Path::new(raw)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Whether `path` exists, following symlinks
///
/// A missing entry or a non-directory in the middle of the path counts as
/// absent. Any other stat failure (permission denied on a parent) is a read
/// error.
pub async fn path_exists(path: &Path) -> Result<bool> {
    match tokio::fs::metadata(path).await {
        Ok(_) => Ok(true),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(false),
        Err(e) => Err(Error::Read(e)),
    }
}
