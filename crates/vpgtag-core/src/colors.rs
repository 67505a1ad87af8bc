//! ANSI color codes for terminal output.
//!
//! Semantic colors for printed grammars:
//! - Green: call terminals
//! - Magenta: return terminals
//! - Blue: rule names
//! - Dim: structure (`:`, `|`, `;`) and suffixes
//! - Reset: Return to default

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes (no RGB), so it reads in both
/// light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub call: &'static str,
    pub ret: &'static str,
    pub rule: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        call: "\x1b[32m",
        ret: "\x1b[35m",
        rule: "\x1b[34m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        call: "",
        ret: "",
        rule: "",
        dim: "",
        reset: "",
    };

    /// Create colors based on enabled flag.
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Check if colors are enabled.
    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
