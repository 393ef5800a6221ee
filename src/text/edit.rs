//! Small string predicates and edits.

use std::io::Cursor;

use crate::error::{Error, Result};

/// True when `text` is absent or has no characters.
pub fn is_null_or_empty(text: Option<&str>) -> bool {
    text.is_none_or(str::is_empty)
}

/// True when `text` is absent, empty, or made only of whitespace.
pub fn is_null_or_whitespace(text: Option<&str>) -> bool {
    text.is_none_or(|s| s.chars().all(char::is_whitespace))
}

/// Drop the last `count` characters of `text`.
pub fn remove_right(text: &str, count: usize) -> Result<&str> {
    let keep = text
        .chars()
        .count()
        .checked_sub(count)
        .ok_or_else(|| out_of_range(text, count))?;
    Ok(&text[..byte_offset(text, keep)])
}

/// Drop the first `count` characters of `text`.
pub fn remove_left(text: &str, count: usize) -> Result<&str> {
    if count > text.chars().count() {
        return Err(out_of_range(text, count));
    }
    Ok(&text[byte_offset(text, count)..])
}

/// Encode `text` as UTF-8 in a readable, seekable buffer positioned at the start.
pub fn to_stream(text: &str) -> Cursor<Vec<u8>> {
    Cursor::new(text.as_bytes().to_vec())
}

/// Byte offset of the character at `index`, or the end of `text`.
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices().nth(index).map_or(text.len(), |(i, _)| i)
}

fn out_of_range(text: &str, count: usize) -> Error {
    Error::argument(
        "count",
        format!("cannot remove {count} characters from a string of {}", text.chars().count()),
    )
}
