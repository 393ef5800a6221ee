//! `strext` - string extension utilities.
//!
//! Argument tokenizing with quote handling, word wrapping that avoids
//! breaking words, fixed-width justification, compact identifier parsing
//! and a few small string helpers. Every operation is available as a free
//! function and as a method through [`StrExt`].

pub mod config;
pub mod constants;
pub mod error;
pub mod ext;
pub mod guid;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use ext::StrExt;
pub use guid::to_guid;
pub use text::{
    is_null_or_empty, is_null_or_whitespace, justify, parse_args, remove_left, remove_right,
    to_snake_case, to_stream, word_wrap, WordWrap,
};
pub use types::Justification;
