//! Plain text decoding

/// Decode bytes as UTF-8, silently dropping invalid sequences
///
/// Line endings are normalized the way a text-mode read does: `\r\n` and a
/// lone `\r` both become `\n`.
pub fn decode_text(bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
    }
    normalize_newlines(&decoded)
}

/// Translate `\r\n` and lone `\r` into `\n`
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            result.push('\n');
        } else {
            result.push(c);
        }
    }

    result
}
