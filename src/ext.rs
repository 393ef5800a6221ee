//! Extension methods on `str`.
//!
//! Thin method-call wrappers so callers can write
//! `"HelloWorld".to_snake_case()` instead of importing each function.

use std::io::Cursor;

use uuid::Uuid;

use crate::error::Result;
use crate::text::{self, WordWrap};
use crate::types::Justification;

/// String extension methods.
pub trait StrExt {
    /// See [`crate::guid::to_guid`].
    fn to_guid(&self) -> Result<Uuid>;

    /// See [`text::justify`].
    fn justify(&self, width: usize, justification: Justification) -> String;

    /// See [`text::parse_args`].
    fn parse_args(&self) -> Vec<String>;

    /// See [`text::word_wrap`].
    fn word_wrap(&self, width: usize) -> Result<WordWrap<'_>>;

    /// See [`text::remove_right`].
    fn remove_right(&self, count: usize) -> Result<&str>;

    /// See [`text::remove_left`].
    fn remove_left(&self, count: usize) -> Result<&str>;

    /// See [`text::to_stream`].
    fn to_stream(&self) -> Cursor<Vec<u8>>;

    /// See [`text::to_snake_case`].
    fn to_snake_case(&self) -> String;

    /// See [`text::is_null_or_empty`].
    fn is_null_or_empty(&self) -> bool;

    /// See [`text::is_null_or_whitespace`].
    fn is_null_or_whitespace(&self) -> bool;
}

impl StrExt for str {
    fn to_guid(&self) -> Result<Uuid> {
        crate::guid::to_guid(self)
    }

    fn justify(&self, width: usize, justification: Justification) -> String {
        text::justify(self, width, justification)
    }

    fn parse_args(&self) -> Vec<String> {
        text::parse_args(self)
    }

    fn word_wrap(&self, width: usize) -> Result<WordWrap<'_>> {
        text::word_wrap(self, width)
    }

    fn remove_right(&self, count: usize) -> Result<&str> {
        text::remove_right(self, count)
    }

    fn remove_left(&self, count: usize) -> Result<&str> {
        text::remove_left(self, count)
    }

    fn to_stream(&self) -> Cursor<Vec<u8>> {
        text::to_stream(self)
    }

    fn to_snake_case(&self) -> String {
        text::to_snake_case(self)
    }

    fn is_null_or_empty(&self) -> bool {
        text::is_null_or_empty(Some(self))
    }

    fn is_null_or_whitespace(&self) -> bool {
        text::is_null_or_whitespace(Some(self))
    }
}
