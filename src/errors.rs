//! Error types with diagnostics using miette

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// The style fields whose values come from a fixed set of names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleField {
    LineStyle,
    LineCap,
    LineJoin,
}

impl StyleField {
    pub fn name(self) -> &'static str {
        match self {
            StyleField::LineStyle => "line_style",
            StyleField::LineCap => "line_cap",
            StyleField::LineJoin => "line_join",
        }
    }
}

impl fmt::Display for StyleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Style Errors
// ============================================================================

/// Errors raised while resolving a paint style, before anything is drawn
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("invalid {field} `{value}`; available values are {}", .allowed.join(", "))]
    #[diagnostic(
        code(cutout::style::invalid_option),
        help("style names are case-sensitive; both word and symbol forms are accepted for line styles")
    )]
    InvalidStyleOption {
        field: StyleField,
        value: String,
        allowed: &'static [&'static str],
    },
}

// ============================================================================
// Color Errors
// ============================================================================

/// Errors from parsing a color name or hex string
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("unknown color: {name}")]
    #[diagnostic(
        code(cutout::color::unknown),
        help("use a CSS color name such as `gold` or a hex value such as `#b22222`")
    )]
    UnknownColor { name: String },

    #[error("invalid hex color: {value}")]
    #[diagnostic(code(cutout::color::invalid_hex), help("hex colors have 3 or 6 digits"))]
    InvalidHex { value: String },
}
