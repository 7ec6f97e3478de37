//! Document text decoding
//!
//! Documents are read as raw bytes and decoded permissively: anything that is
//! not valid UTF-8 is dropped rather than reported, so decoding never fails.

mod text;

pub use text::*;

use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Read a whole file and decode it as text
///
/// I/O failures (permissions, is-a-directory) surface as [`Error::Read`];
/// invalid byte sequences never do.
pub async fn read_text_file(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await.map_err(Error::Read)?;
    let text = decode_text(&bytes);
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        chars = text.chars().count(),
        "Decoded document"
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_text_file_drops_invalid_bytes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mixed.txt");
        std::fs::write(&path, b"ab\xff\xfecd").unwrap();

        let text = read_text_file(&path).await.unwrap();
        assert_eq!(text, "abcd");
    }

    #[tokio::test]
    async fn test_read_text_file_directory_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let result = read_text_file(tmp.path()).await;
        assert!(matches!(result, Err(Error::Read(_))));
    }
}
