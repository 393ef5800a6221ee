//! Identifier parsing.
//!
//! Accepts either a full canonical identifier or the compact 8-digit
//! time-low fragment, which is expanded with a zero suffix.

use uuid::Uuid;

use crate::constants::guid::{COMPACT_LEN, COMPACT_SUFFIX};
use crate::error::{Error, Result};

/// Parse a compact or full identifier string.
///
/// An 8-character input is read as the high 32 bits of the identifier with
/// all remaining bits zero, so `"12345678"` becomes
/// `12345678-0000-0000-0000-000000000000`. Anything else must be a valid
/// identifier on its own.
///
/// Surrounding whitespace is ignored. Full identifiers may be hyphenated,
/// simple (32 hex digits), braced or `urn:uuid:` prefixed; the
/// parenthesised `(...)` form is not supported.
pub fn to_guid(input: &str) -> Result<Uuid> {
    let trimmed = input.trim();
    let parsed = if trimmed.chars().count() == COMPACT_LEN {
        Uuid::parse_str(&format!("{trimmed}{COMPACT_SUFFIX}"))
    } else {
        Uuid::parse_str(trimmed)
    };
    parsed.map_err(|e| Error::format(input, e))
}
