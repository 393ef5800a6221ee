//! Default widths and justification.
//!
//! Handles loading defaults from environment variables and .env files.

use std::env;
use std::path::Path;

use dotenv::dotenv;

use crate::constants::{env as keys, layout};
use crate::error::{Error, Result};
use crate::text::{self, WordWrap};
use crate::types::Justification;

/// Defaults applied by [`Config::wrap`] and [`Config::justify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Chunk width used for word wrapping
    pub wrap_width: usize,
    /// Field width used for justification
    pub justify_width: usize,
    /// Justification mode
    pub justification: Justification,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: layout::DEFAULT_WRAP_WIDTH,
            justify_width: layout::DEFAULT_JUSTIFY_WIDTH,
            justification: Justification::default(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a specific `.env` file, then the environment
    pub fn load_from(path: &Path) -> Result<Self> {
        dotenv::from_path(path).map_err(|e| {
            Error::config(
                format!("failed to read {}: {e}", path.display()),
                "Check that the file exists and uses KEY=value lines",
            )
        })?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, falling back to defaults for
    /// keys it does not provide.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(width) = lookup(keys::WRAP_WIDTH) {
            config.wrap_width = parse_width(keys::WRAP_WIDTH, &width)?;
            if config.wrap_width == 0 {
                return Err(Error::config(
                    format!("{} must be positive", keys::WRAP_WIDTH),
                    "Set STREXT_WRAP_WIDTH to an integer of at least 1",
                ));
            }
        }

        if let Some(width) = lookup(keys::JUSTIFY_WIDTH) {
            config.justify_width = parse_width(keys::JUSTIFY_WIDTH, &width)?;
        }

        if let Some(mode) = lookup(keys::JUSTIFICATION) {
            config.justification = mode.parse().map_err(|e: String| {
                Error::config(e, "Set STREXT_JUSTIFICATION to left, centre or right")
            })?;
        }

        tracing::debug!(
            "Loaded config: wrap_width={} justify_width={} justification={}",
            config.wrap_width,
            config.justify_width,
            config.justification
        );
        Ok(config)
    }

    /// Word wrap `input` at the configured width
    pub fn wrap<'a>(&self, input: &'a str) -> Result<WordWrap<'a>> {
        text::word_wrap(input, self.wrap_width)
    }

    /// Justify `input` with the configured width and mode
    pub fn justify(&self, input: &str) -> String {
        text::justify(input, self.justify_width, self.justification)
    }
}

fn parse_width(key: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| {
        Error::config(
            format!("{key}={value:?} is not a width"),
            "Widths must be non-negative integers",
        )
    })
}
