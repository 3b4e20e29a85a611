//! Paint styles and the name tables for line styles, caps, and joins.
//!
//! A [`PaintStyle`] keeps line style, cap, and join as the names the caller
//! asked for. They are looked up in the constant tables below only when the
//! style is resolved for drawing, which is where an unknown name is reported.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::defaults;
use crate::errors::{StyleError, StyleField};

/// Dash style of a stroked line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

/// Shape drawn at the open ends of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Square,
    Round,
    Butt,
}

/// Shape drawn where two stroke segments meet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Bevel,
    Round,
    Miter,
}

// ============================================================================
// Name Tables
// ============================================================================

pub const LINE_STYLES: &[(&str, LineStyle)] = &[
    ("solid", LineStyle::Solid),
    ("dashed", LineStyle::Dashed),
    ("dotted", LineStyle::Dotted),
    ("dash-dot", LineStyle::DashDot),
    ("-", LineStyle::Solid),
    ("--", LineStyle::Dashed),
    (".", LineStyle::Dotted),
    ("-.", LineStyle::DashDot),
];

pub const LINE_CAPS: &[(&str, LineCap)] = &[
    ("square", LineCap::Square),
    ("round", LineCap::Round),
    ("butt", LineCap::Butt),
];

pub const LINE_JOINS: &[(&str, LineJoin)] = &[
    ("bevel", LineJoin::Bevel),
    ("round", LineJoin::Round),
    ("miter", LineJoin::Miter),
];

const LINE_STYLE_NAMES: &[&str] = &["solid", "dashed", "dotted", "dash-dot", "-", "--", ".", "-."];
const LINE_CAP_NAMES: &[&str] = &["square", "round", "butt"];
const LINE_JOIN_NAMES: &[&str] = &["bevel", "round", "miter"];

fn lookup<T: Copy>(
    table: &[(&str, T)],
    allowed: &'static [&'static str],
    field: StyleField,
    value: &str,
) -> Result<T, StyleError> {
    table
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, v)| *v)
        .ok_or_else(|| StyleError::InvalidStyleOption {
            field,
            value: value.to_string(),
            allowed,
        })
}

impl LineStyle {
    pub fn name(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::DashDot => "dash-dot",
        }
    }

    /// Dash lengths for a line of width 1; empty means a continuous line.
    pub fn base_pattern(self) -> &'static [f64] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dashed => &[4.0, 1.0],
            LineStyle::Dotted => &[0.0, 2.0],
            LineStyle::DashDot => &[0.0, 2.0, 4.0, 2.0],
        }
    }

    /// The base pattern scaled by the line width
    pub fn dash_pattern(self, line_width: f64) -> Vec<f64> {
        self.base_pattern().iter().map(|d| d * line_width).collect()
    }

    /// Styles with zero-length dashes need round caps to show up as dots.
    pub fn needs_round_cap(self) -> bool {
        matches!(self, LineStyle::Dotted | LineStyle::DashDot)
    }
}

impl LineCap {
    pub fn name(self) -> &'static str {
        match self {
            LineCap::Square => "square",
            LineCap::Round => "round",
            LineCap::Butt => "butt",
        }
    }
}

impl LineJoin {
    pub fn name(self) -> &'static str {
        match self {
            LineJoin::Bevel => "bevel",
            LineJoin::Round => "round",
            LineJoin::Miter => "miter",
        }
    }
}

macro_rules! named_option {
    ($ty:ty, $table:expr, $names:expr, $field:expr) => {
        impl FromStr for $ty {
            type Err = StyleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                lookup($table, $names, $field, s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_option!(LineStyle, LINE_STYLES, LINE_STYLE_NAMES, StyleField::LineStyle);
named_option!(LineCap, LINE_CAPS, LINE_CAP_NAMES, StyleField::LineCap);
named_option!(LineJoin, LINE_JOINS, LINE_JOIN_NAMES, StyleField::LineJoin);

// ============================================================================
// Paint Style
// ============================================================================

/// Fill and stroke settings for one shape.
///
/// `line_style`, `line_cap`, and `line_join` hold names (`"dashed"`, `"--"`,
/// `"round"`, ...) and are checked by [`PaintStyle::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaintStyle {
    pub fill_color: Option<Color>,
    pub line_color: Option<Color>,
    pub line_width: f64,
    pub line_style: String,
    pub line_cap: String,
    pub line_join: String,
    pub opacity: f64,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            fill_color: None,
            line_color: Some(defaults::LINE_COLOR),
            line_width: defaults::LINE_WIDTH,
            line_style: defaults::LINE_STYLE.to_string(),
            line_cap: defaults::LINE_CAP.to_string(),
            line_join: defaults::BOX_LINE_JOIN.to_string(),
            opacity: defaults::OPACITY,
        }
    }
}

impl PaintStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// No fill and no stroke
    pub fn none() -> Self {
        Self {
            line_color: None,
            ..Self::default()
        }
    }

    pub fn fill_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.fill_color = color.into();
        self
    }

    pub fn line_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.line_color = color.into();
        self
    }

    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn line_style(mut self, style: impl ToString) -> Self {
        self.line_style = style.to_string();
        self
    }

    pub fn line_cap(mut self, cap: impl ToString) -> Self {
        self.line_cap = cap.to_string();
        self
    }

    pub fn line_join(mut self, join: impl ToString) -> Self {
        self.line_join = join.to_string();
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Look up the named options, failing on the first unknown one.
    ///
    /// Checked in the order line style, line cap, line join.
    pub fn resolve(&self) -> Result<ResolvedStyle, StyleError> {
        Ok(ResolvedStyle {
            fill_color: self.fill_color,
            line_color: self.line_color,
            line_width: self.line_width,
            line_style: self.line_style.parse()?,
            line_cap: self.line_cap.parse()?,
            line_join: self.line_join.parse()?,
            opacity: self.opacity,
        })
    }
}

/// A [`PaintStyle`] whose named options have been checked
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub fill_color: Option<Color>,
    pub line_color: Option<Color>,
    pub line_width: f64,
    pub line_style: LineStyle,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub opacity: f64,
}

impl ResolvedStyle {
    /// Cap actually used when stroking: dotted styles always get round caps.
    pub fn effective_cap(&self) -> LineCap {
        if self.line_style.needs_round_cap() {
            LineCap::Round
        } else {
            self.line_cap
        }
    }

    pub fn dash_pattern(&self) -> Vec<f64> {
        self.line_style.dash_pattern(self.line_width)
    }

    pub fn is_visible(&self) -> bool {
        self.fill_color.is_some() || self.line_color.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lists_match_tables() {
        assert_eq!(LINE_STYLES.iter().map(|(n, _)| *n).collect::<Vec<_>>(), LINE_STYLE_NAMES);
        assert_eq!(LINE_CAPS.iter().map(|(n, _)| *n).collect::<Vec<_>>(), LINE_CAP_NAMES);
        assert_eq!(LINE_JOINS.iter().map(|(n, _)| *n).collect::<Vec<_>>(), LINE_JOIN_NAMES);
    }

    #[test]
    fn names_round_trip_through_display() {
        for (_, style) in LINE_STYLES {
            assert_eq!(style.to_string().parse::<LineStyle>(), Ok(*style));
        }
        for (_, cap) in LINE_CAPS {
            assert_eq!(cap.to_string().parse::<LineCap>(), Ok(*cap));
        }
        for (_, join) in LINE_JOINS {
            assert_eq!(join.to_string().parse::<LineJoin>(), Ok(*join));
        }
    }

    #[test]
    fn symbolic_line_styles() {
        assert_eq!("--".parse::<LineStyle>(), Ok(LineStyle::Dashed));
        assert_eq!("-.".parse::<LineStyle>(), Ok(LineStyle::DashDot));
        assert_eq!(".".parse::<LineStyle>(), Ok(LineStyle::Dotted));
        assert_eq!("-".parse::<LineStyle>(), Ok(LineStyle::Solid));
    }

    #[test]
    fn dash_patterns_scale_with_width() {
        assert!(LineStyle::Solid.dash_pattern(5.0).is_empty());
        assert_eq!(LineStyle::Dashed.dash_pattern(7.0), vec![28.0, 7.0]);
        assert_eq!(LineStyle::Dotted.dash_pattern(5.0), vec![0.0, 10.0]);
        assert_eq!(LineStyle::DashDot.dash_pattern(2.0), vec![0.0, 4.0, 8.0, 4.0]);
    }

    #[test]
    fn dotted_forces_round_cap() {
        for cap in ["square", "round", "butt"] {
            for style in ["dotted", "dash-dot"] {
                let resolved = PaintStyle::new().line_style(style).line_cap(cap).resolve().unwrap();
                assert_eq!(resolved.effective_cap(), LineCap::Round);
            }
        }
        let dashed = PaintStyle::new().line_style("dashed").line_cap("square").resolve().unwrap();
        assert_eq!(dashed.effective_cap(), LineCap::Square);
    }

    #[test]
    fn unknown_join_is_reported_with_allowed_set() {
        let err = PaintStyle::new().line_join("mitter").resolve().unwrap_err();
        assert_eq!(
            err,
            StyleError::InvalidStyleOption {
                field: StyleField::LineJoin,
                value: "mitter".to_string(),
                allowed: LINE_JOIN_NAMES,
            }
        );
    }

    #[test]
    fn unknown_style_is_checked_first() {
        let err = PaintStyle::new().line_style("wavy").line_cap("flat").resolve().unwrap_err();
        assert!(matches!(
            err,
            StyleError::InvalidStyleOption { field: StyleField::LineStyle, .. }
        ));
    }

    #[test]
    fn defaults() {
        let style = PaintStyle::default().resolve().unwrap();
        assert_eq!(style.fill_color, None);
        assert_eq!(style.line_color, Some(Color::BLACK));
        assert_eq!(style.line_width, 1.0);
        assert_eq!(style.line_style, LineStyle::Solid);
        assert_eq!(style.line_cap, LineCap::Butt);
        assert_eq!(style.line_join, LineJoin::Miter);
        assert_eq!(style.opacity, 1.0);
        assert!(!PaintStyle::none().resolve().unwrap().is_visible());
    }
}
