//! Chunked document reading

use super::paths::{normalize_path, path_exists};
use crate::chunk::ChunkWindow;
use crate::error::{Error, Result};
use crate::models::ChunkResult;
use crate::parse::read_text_file;
use tracing::debug;

/// Read one chunk of the document at `path`
///
/// The whole file is read and decoded on every call; the caller pages with
/// `offset = next_offset` until `eof`.
pub async fn cmd_read_document_chunk(
    path: &str,
    offset: i64,
    chunk_size: i64,
) -> Result<ChunkResult> {
    let file = normalize_path(path);
    if !path_exists(&file).await? {
        return Err(Error::file_not_found(file.display()));
    }

    let text = read_text_file(&file).await?;
    let total_len = text.chars().count() as i64;
    let window = ChunkWindow::new(total_len, offset, chunk_size);
    let content = window.slice(&text).to_string();

    debug!(
        path = %file.display(),
        offset = window.start,
        end = window.end,
        total_len,
        eof = window.eof,
        "Read document chunk"
    );

    Ok(ChunkResult {
        path: file.display().to_string(),
        filename: file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        offset: window.start,
        next_offset: window.next_offset,
        chunk_size: content.chars().count() as i64,
        total_length: total_len,
        progress: window.progress,
        eof: window.eof,
        content,
    })
}
