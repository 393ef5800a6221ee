//! Word wrapping without breaking words.
//!
//! [`WordWrap`] is a pull iterator: each call to `next` computes one chunk
//! from the cursor it owns, so chunks can be consumed lazily and the
//! iterator cannot be rewound.

use std::iter::FusedIterator;

use crate::error::{Error, Result};

/// Lazily split `input` into chunks of at most `width` characters.
///
/// Chunks break on whitespace where possible. A word longer than `width`
/// is cut hard at `width` characters. Whitespace at the start of each chunk
/// is skipped; input that ends in whitespace after the last chunk yields
/// one final empty chunk.
///
/// Fails when `input` is absent or `width` is zero.
pub fn word_wrap<'a>(input: impl Into<Option<&'a str>>, width: usize) -> Result<WordWrap<'a>> {
    let rest = input
        .into()
        .ok_or_else(|| Error::argument("input", "cannot wrap an absent string"))?;
    if width == 0 {
        return Err(Error::argument("width", "chunk width has to be positive"));
    }
    Ok(WordWrap { rest, width })
}

/// Iterator over wrapped chunks, borrowed from the input.
#[derive(Debug)]
pub struct WordWrap<'a> {
    /// Unconsumed input; the cursor is its start.
    rest: &'a str,
    width: usize,
}

impl WordWrap<'_> {
    /// Maximum chunk width in characters.
    pub const fn width(&self) -> usize {
        self.width
    }
}

impl<'a> Iterator for WordWrap<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let rest = self.rest.trim_start_matches(char::is_whitespace);
        if rest.is_empty() {
            // Only whitespace was left: the cursor still had input, so emit
            // the empty chunk at the end of the string.
            self.rest = rest;
            return Some(rest);
        }

        // One character past the width, to see whether a break follows.
        let window: Vec<(usize, char)> = rest.char_indices().take(self.width + 1).collect();

        let split = (1..=self.width)
            .rev()
            .find(|&j| j == window.len() || window.get(j).is_some_and(|&(_, c)| c.is_whitespace()))
            .unwrap_or_else(|| {
                tracing::trace!("No break within {} chars, cutting word", self.width);
                self.width
            })
            .min(window.len());

        let end = window.get(split).map_or(rest.len(), |&(i, _)| i);
        let (chunk, remaining) = rest.split_at(end);
        self.rest = remaining;
        Some(chunk)
    }
}

impl FusedIterator for WordWrap<'_> {}
