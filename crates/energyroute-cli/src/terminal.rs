//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for terminal output.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for node identifiers.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (weights, separators).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for energy values.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for the path header and totals.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for the "no path" message.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_has_no_escape_codes() {
        let palette = ColorPalette::plain();
        for code in [
            palette.reset,
            palette.white_bold,
            palette.gray,
            palette.cyan,
            palette.green,
            palette.red,
        ] {
            assert!(code.is_empty());
        }
    }

    #[test]
    fn colored_palette_uses_ansi_codes() {
        let palette = ColorPalette::colored();
        assert_eq!(palette.reset, "\x1b[0m");
        assert!(palette.green.starts_with("\x1b["));
    }
}
