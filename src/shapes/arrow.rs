use crate::color::Color;
use crate::defaults;
use crate::errors::StyleError;
use crate::paint::apply_paint;
use crate::style::{LineStyle, PaintStyle};
use crate::surface::{Surface, SurfaceGuard};
use crate::types::{Angle, Point};

use super::Draw;
use super::polyline::{draw_points, span_pivot};

/// How the tip of an [`Arrow`] is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadStyle {
    /// Filled triangle: tip and the two back corners
    #[default]
    Triangle,
    /// Filled head with a notch cut into its back edge
    Arrow,
    /// Open chevron, stroked only
    Stroke,
}

impl HeadStyle {
    pub fn name(self) -> &'static str {
        match self {
            HeadStyle::Triangle => "triangle",
            HeadStyle::Arrow => "arrow",
            HeadStyle::Stroke => "stroke",
        }
    }
}

/// Builder for an [`Arrow`] with non-default head settings
#[derive(Debug, Clone)]
pub struct ArrowBuilder {
    origin: Point,
    vector: Point,
    head_style: HeadStyle,
    head_length: f64,
    head_width: f64,
    min_head_length: Option<f64>,
    head_color: Option<Color>,
    style: PaintStyle,
}

impl ArrowBuilder {
    pub fn head_style(mut self, head_style: HeadStyle) -> Self {
        self.head_style = head_style;
        self
    }

    /// Head length as a fraction of the arrow length
    pub fn head_length(mut self, head_length: f64) -> Self {
        self.head_length = head_length;
        self
    }

    /// Head width as a fraction of the arrow length
    pub fn head_width(mut self, head_width: f64) -> Self {
        self.head_width = head_width;
        self
    }

    /// Smallest head length in absolute units. Heads that would come out
    /// shorter are scaled up, keeping their width-to-length ratio.
    pub fn min_head_length(mut self, min_head_length: f64) -> Self {
        self.min_head_length = Some(min_head_length);
        self
    }

    /// Head color; defaults to the line color
    pub fn head_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.head_color = color.into();
        self
    }

    pub fn build(self) -> Arrow {
        let length = self.vector.length();
        let (head_length, head_width) = clamp_head(length, self.head_length, self.head_width, self.min_head_length);
        let head = head_points(self.origin, self.vector, head_length, head_width);

        if head.is_none() {
            crate::log::warn!(length, head_length, head_width, "arrow head is degenerate, head skipped");
        }

        Arrow {
            origin: self.origin,
            vector: self.vector,
            length,
            head_style: self.head_style,
            head_length,
            head_width,
            head_color: self.head_color,
            head,
            style: self.style,
        }
    }
}

style_builders!(ArrowBuilder { stroke });

/// Scale the head up for short arrows.
///
/// When the whole arrow is shorter than `min_head_length` the head spans the
/// full shaft. Otherwise a head shorter than `min_head_length` grows to exactly
/// that length. Either way the width-to-length ratio is kept.
fn clamp_head(length: f64, head_length: f64, head_width: f64, min_head_length: Option<f64>) -> (f64, f64) {
    let Some(min) = min_head_length.filter(|m| *m > 0.0) else {
        return (head_length, head_width);
    };

    let aspect = head_width / head_length;
    if length < min {
        (1.0, aspect)
    } else if head_length * length < min {
        let head_length = min / length;
        (head_length, aspect * head_length)
    } else {
        (head_length, head_width)
    }
}

/// `[tip, left back corner, notch, right back corner]`, or `None` when the
/// vector has no direction.
fn head_points(origin: Point, vector: Point, head_length: f64, head_width: f64) -> Option<[Point; 4]> {
    let length = vector.length();
    if length == 0.0 || !length.is_finite() {
        return None;
    }

    let normal = vector.perp() / length;
    let back = origin + vector * (1.0 - head_length);
    let half_width = normal * (head_width / 2.0) * length;

    let points = [
        origin + vector,
        back + half_width,
        origin + vector * (1.0 - defaults::ARROW_NOTCH_DEPTH * head_length),
        back - half_width,
    ];
    points.iter().all(|p| p.is_finite()).then_some(points)
}

/// A straight shaft from `origin` to `origin + vector` with a head at the tip.
///
/// Head length and width are fractions of the arrow length. The head geometry
/// is computed when the arrow is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    origin: Point,
    vector: Point,
    length: f64,
    head_style: HeadStyle,
    head_length: f64,
    head_width: f64,
    head_color: Option<Color>,
    head: Option<[Point; 4]>,
    style: PaintStyle,
}

impl Arrow {
    /// An arrow with the default head
    pub fn new(origin: Point, vector: Point) -> Self {
        Self::builder(origin, vector).build()
    }

    pub fn builder(origin: Point, vector: Point) -> ArrowBuilder {
        ArrowBuilder {
            origin,
            vector,
            head_style: HeadStyle::default(),
            head_length: defaults::ARROW_HEAD_LENGTH,
            head_width: defaults::ARROW_HEAD_WIDTH,
            min_head_length: None,
            head_color: None,
            style: PaintStyle::default(),
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn vector(&self) -> Point {
        self.vector
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn head_style(&self) -> HeadStyle {
        self.head_style
    }

    /// Head length after clamping, as a fraction of the arrow length
    pub fn head_length(&self) -> f64 {
        self.head_length
    }

    /// Head width after clamping, as a fraction of the arrow length
    pub fn head_width(&self) -> f64 {
        self.head_width
    }

    /// `[tip, left, notch, right]`
    pub fn head_points(&self) -> Option<&[Point; 4]> {
        self.head.as_ref()
    }

    /// The points of the head path for the current head style
    pub fn head_outline(&self) -> Vec<Point> {
        let Some([tip, left, notch, right]) = self.head else {
            return Vec::new();
        };
        match self.head_style {
            HeadStyle::Triangle => vec![tip, left, right],
            HeadStyle::Arrow => vec![tip, left, notch, right],
            HeadStyle::Stroke => vec![left, tip, right],
        }
    }

    pub fn style(&self) -> &PaintStyle {
        &self.style
    }

    fn shaft_style(&self) -> PaintStyle {
        PaintStyle {
            fill_color: None,
            line_cap: defaults::LINE_CAP.to_string(),
            line_join: defaults::BOX_LINE_JOIN.to_string(),
            ..self.style.clone()
        }
    }

    fn head_paint_style(&self) -> PaintStyle {
        let color = self.head_color.or(self.style.line_color);
        let base = PaintStyle {
            line_color: color,
            line_cap: defaults::LINE_CAP.to_string(),
            line_join: defaults::PATH_LINE_JOIN.to_string(),
            ..self.style.clone()
        };
        match self.head_style {
            HeadStyle::Triangle | HeadStyle::Arrow => PaintStyle {
                fill_color: color,
                line_style: LineStyle::Solid.to_string(),
                ..base
            },
            HeadStyle::Stroke => PaintStyle {
                fill_color: None,
                ..base
            },
        }
    }
}

impl Draw for Arrow {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), StyleError> {
        let shaft = self.shaft_style().resolve()?;
        let head = self.head_paint_style().resolve()?;

        if self.length == 0.0 || !self.length.is_finite() {
            crate::log::warn!(length = self.length, "arrow has no direction, not drawn");
            return Ok(());
        }

        crate::log::debug!(
            length = self.length,
            head_style = self.head_style.name(),
            head_length = self.head_length,
            "draw arrow"
        );

        let mut guard = SurfaceGuard::new(surface);
        guard.move_to(self.origin);
        guard.line_to(self.origin + self.vector);
        apply_paint(&mut *guard, &shaft);

        if self.head.is_none() {
            return Ok(());
        }
        let outline = self.head_outline();
        let closed = self.head_style != HeadStyle::Stroke;
        draw_points(&mut *guard, &outline, span_pivot(&outline), Angle::ZERO, &head, closed);
        Ok(())
    }
}
