//! Crate constants.
//!
//! Centralizes magic numbers and configuration keys.

/// Identifier constants.
pub mod guid {
    /// Length of a compact (time-low only) identifier.
    pub const COMPACT_LEN: usize = 8;

    /// Zero suffix appended to a compact identifier to make it canonical.
    pub const COMPACT_SUFFIX: &str = "-0000-0000-0000-000000000000";
}

/// Default layout widths.
pub mod layout {
    /// Default wrap column width for word wrapping.
    pub const DEFAULT_WRAP_WIDTH: usize = 80;

    /// Default field width for justification.
    pub const DEFAULT_JUSTIFY_WIDTH: usize = 80;
}

/// Environment variable names read by [`crate::config::Config::load`].
pub mod env {
    /// Wrap width override.
    pub const WRAP_WIDTH: &str = "STREXT_WRAP_WIDTH";

    /// Justify width override.
    pub const JUSTIFY_WIDTH: &str = "STREXT_JUSTIFY_WIDTH";

    /// Justification mode override (`left`, `centre`, `right`).
    pub const JUSTIFICATION: &str = "STREXT_JUSTIFICATION";
}
