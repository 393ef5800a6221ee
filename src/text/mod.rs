//! String transforms.
//!
//! Each function is pure: output depends only on the arguments.

pub mod args;
pub mod case;
pub mod edit;
pub mod justify;
pub mod wrap;

pub use args::{parse_args, ScanAction, ScanState};
pub use case::to_snake_case;
pub use edit::{is_null_or_empty, is_null_or_whitespace, remove_left, remove_right, to_stream};
pub use justify::justify;
pub use wrap::{word_wrap, WordWrap};
