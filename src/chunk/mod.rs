//! Chunk window arithmetic
//!
//! Offsets and sizes come straight from callers and may be negative or zero.
//! The window is recomputed from scratch on every read; nothing is cached
//! between calls, so pagination cursors stay with the caller.

/// Position of one requested chunk within a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkWindow {
    /// Effective start, `max(0, offset)`
    pub start: i64,
    /// `min(total_len, start + chunk_size)`; negative when `chunk_size` is
    pub end: i64,
    pub total_len: i64,
    pub eof: bool,
    pub next_offset: Option<i64>,
    pub progress: String,
}

impl ChunkWindow {
    /// Compute the window for a document of `total_len` characters
    pub fn new(total_len: i64, offset: i64, chunk_size: i64) -> Self {
        let start = offset.max(0);
        let end = total_len.min(start.saturating_add(chunk_size));
        let eof = end >= total_len;

        Self {
            start,
            end,
            total_len,
            eof,
            next_offset: if eof { None } else { Some(end) },
            progress: format_progress(end, total_len),
        }
    }

    /// Slice `text` (which must be `total_len` chars long) to this window
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        if self.start >= self.end || self.start >= self.total_len {
            return "";
        }
        // start < end <= total_len, so both fit in usize
        slice_chars(text, self.start as usize, self.end as usize)
    }
}

/// Substring by character (not byte) positions, `start <= end`
pub fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    let byte_at = |pos: usize| {
        text.char_indices()
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    };
    &text[byte_at(start)..byte_at(end)]
}

/// Percentage of the document covered once `end` is reached
///
/// One decimal place, e.g. `"81.8%"`; an empty document reports `"0%"`.
pub fn format_progress(end: i64, total_len: i64) -> String {
    if total_len == 0 {
        return "0%".to_string();
    }
    let pct = (end as f64 / total_len as f64) * 100.0;
    format!("{:.1}%", pct)
}
