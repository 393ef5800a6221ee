//! Crate error types.
//!
//! Every fallible operation reports one of these with enough context to
//! tell the caller which argument was wrong and why.

use thiserror::Error;

/// Crate result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types returned by the string utilities
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed identifier string
    #[error("Format error: {input:?} is not a valid identifier: {source}")]
    Format {
        /// The string that failed to parse.
        input: String,
        /// The underlying parse failure.
        source: uuid::Error,
    },

    /// Invalid or missing argument
    #[error("Invalid argument `{param}`: {message}")]
    Argument {
        /// Name of the offending parameter.
        param: &'static str,
        /// Description of what was wrong with it.
        message: String,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create an identifier format error
    pub fn format(input: impl Into<String>, source: uuid::Error) -> Self {
        Self::Format { input: input.into(), source }
    }

    /// Create an argument error for the named parameter
    pub fn argument(param: &'static str, message: impl Into<String>) -> Self {
        Self::Argument { param, message: message.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Name of the parameter at fault, for argument errors
    pub const fn param(&self) -> Option<&'static str> {
        match self {
            Self::Argument { param, .. } => Some(*param),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn argument_error_names_parameter() {
        let err = Error::argument("width", "must be positive");
        assert_eq!(err.param(), Some("width"));
        assert_eq!(err.to_string(), "Invalid argument `width`: must be positive");
    }

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("bad width", "Set STREXT_WRAP_WIDTH to a positive integer");
        match err {
            Error::Config { hint, .. } => assert!(hint.contains("STREXT_WRAP_WIDTH")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn format_error_keeps_input() {
        let source = uuid::Uuid::parse_str("nope").unwrap_err();
        let err = Error::format("nope", source);
        assert!(err.to_string().contains("\"nope\""));
        assert_eq!(err.param(), None);
    }
}
