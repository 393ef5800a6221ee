//! Core type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How text is placed inside a fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    /// Text flush left, padded on the right.
    #[default]
    Left,
    /// Text centred, extra padding goes to the trailing side.
    #[serde(alias = "center")]
    Centre,
    /// Text flush right, padded on the left.
    Right,
}

impl Justification {
    /// Returns all variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Left, Self::Centre, Self::Right]
    }

    /// Returns the lowercase name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Centre => "centre",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Justification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "centre" | "center" => Ok(Self::Centre),
            "right" => Ok(Self::Right),
            other => Err(format!("unknown justification {other:?}")),
        }
    }
}
