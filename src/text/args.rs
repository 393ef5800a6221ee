//! Command-line style argument tokenizing.
//!
//! Arguments are separated by whitespace. Single or double quotes delimit
//! arguments that contain whitespace. The scan is driven by [`ScanState`],
//! whose transition function is pure so the table can be checked on its
//! own.
//!
//! Quoting is deliberately loose:
//! - a closing quote ends the argument immediately, so `'it''s'` yields
//!   `it` and `s` with no separator between them;
//! - an opening quote discards whatever was accumulated since the last
//!   boundary, so `ab"cd"` yields just `cd`;
//! - unterminated quotes are not an error; the rest of the input becomes
//!   the final argument.
//!
//! The first whitespace after an argument always emits the buffer, even an
//! empty one, so `" foo"` yields `["", "foo"]`. Further whitespace in the
//! same run is buffered and dropped when the next argument starts, which
//! leaves trailing runs as a whitespace-only final argument: `"foo  "`
//! yields `["foo", " "]`.

/// Where the scanner is relative to quotes and whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Inside an unquoted argument, or at the start of input.
    #[default]
    Default,
    /// Inside a run of unquoted whitespace.
    InWhitespace,
    /// Inside a quoted span.
    InQuote {
        /// The character that opened the span and will close it.
        quote: char,
        /// Whether a whitespace run was active when the span opened.
        /// Closing the span returns to that state.
        after_whitespace: bool,
    },
}

/// What a transition does to the argument buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanAction {
    /// Append the character to the buffer.
    Push,
    /// Clear the buffer; the character is dropped.
    Discard,
    /// Replace the buffer with just this character.
    Restart,
    /// Whitespace boundary: emit the buffer, even when empty.
    Break,
    /// Closing quote: emit the buffer, even when empty.
    Close,
}

impl ScanState {
    /// Compute the next state and buffer action for `c`.
    #[must_use]
    pub fn step(self, c: char) -> (Self, ScanAction) {
        match self {
            Self::InQuote { quote, after_whitespace } if c == quote => {
                let next = if after_whitespace { Self::InWhitespace } else { Self::Default };
                (next, ScanAction::Close)
            }
            Self::InQuote { .. } => (self, ScanAction::Push),
            Self::Default | Self::InWhitespace if is_quote(c) => (
                Self::InQuote { quote: c, after_whitespace: self == Self::InWhitespace },
                ScanAction::Discard,
            ),
            Self::Default if c.is_whitespace() => (Self::InWhitespace, ScanAction::Break),
            Self::Default => (self, ScanAction::Push),
            Self::InWhitespace if c.is_whitespace() => (self, ScanAction::Push),
            Self::InWhitespace => (Self::Default, ScanAction::Restart),
        }
    }

    /// Whether the scanner is inside an unterminated quoted span.
    pub const fn in_quote(self) -> bool {
        matches!(self, Self::InQuote { .. })
    }
}

const fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"')
}

/// Split `input` into arguments.
///
/// `None` and `""` both yield no arguments.
pub fn parse_args<'a>(input: impl Into<Option<&'a str>>) -> Vec<String> {
    let Some(input) = input.into() else {
        return Vec::new();
    };

    let mut args = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::default();

    for c in input.chars() {
        let (next, action) = state.step(c);
        match action {
            ScanAction::Push => current.push(c),
            ScanAction::Discard => current.clear(),
            ScanAction::Restart => {
                current.clear();
                current.push(c);
            }
            ScanAction::Break | ScanAction::Close => args.push(std::mem::take(&mut current)),
        }
        state = next;
    }

    if state.in_quote() {
        tracing::debug!("Unterminated quote in argument string, flushing {} chars", current.chars().count());
    }
    if !current.is_empty() {
        args.push(current);
    }
    args
}
