use crate::defaults;
use crate::errors::StyleError;
use crate::style::{PaintStyle, ResolvedStyle};
use crate::surface::Surface;
use crate::types::{Angle, BBox, Point};

use super::{Draw, draw_oriented};

/// Pivot used to rotate a list of points.
///
/// This is half the extent of the points' bounding box, i.e. the center of
/// the box only when it touches the origin.
pub(crate) fn span_pivot(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ZERO;
    }
    BBox::from_points(points).half_span()
}

fn emit_points(surface: &mut dyn Surface, points: &[Point], close: bool) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    surface.move_to(*first);
    for p in rest {
        surface.line_to(*p);
    }
    if close {
        surface.close_path();
    }
}

/// Draw a point list as a single path, rotated about `pivot`.
pub(crate) fn draw_points(
    surface: &mut dyn Surface,
    points: &[Point],
    pivot: Point,
    orientation: Angle,
    paint: &ResolvedStyle,
    closed: bool,
) {
    if points.is_empty() {
        crate::log::warn!("no points to draw");
        return;
    }
    draw_oriented(surface, orientation, pivot, paint, |s| emit_points(s, points, closed));
}

fn polyline_style() -> PaintStyle {
    PaintStyle {
        line_join: defaults::PATH_LINE_JOIN.to_string(),
        ..PaintStyle::default()
    }
}

/// An open polyline through `points`. Never filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Lines {
    points: Vec<Point>,
    pivot: Point,
    orientation: Angle,
    style: PaintStyle,
}

impl Lines {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let points: Vec<Point> = points.into_iter().collect();
        let pivot = span_pivot(&points);
        Self {
            points,
            pivot,
            orientation: Angle::ZERO,
            style: polyline_style(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point the orientation rotates about
    pub fn pivot(&self) -> Point {
        self.pivot
    }
}

style_builders!(Lines { stroke, joins, orient, style });

impl Draw for Lines {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), StyleError> {
        let mut paint = self.style.resolve()?;
        paint.fill_color = None;

        crate::log::debug!(points = self.points.len(), orientation = %self.orientation, "draw lines");

        draw_points(surface, &self.points, self.pivot, self.orientation, &paint, false);
        Ok(())
    }
}

/// A polygon through `points`, closed back to the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    pivot: Point,
    orientation: Angle,
    style: PaintStyle,
}

impl Polygon {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let points: Vec<Point> = points.into_iter().collect();
        let pivot = span_pivot(&points);
        Self {
            points,
            pivot,
            orientation: Angle::ZERO,
            style: polyline_style(),
        }
    }

    /// Rotate about `pivot` instead of the default
    pub fn with_pivot(mut self, pivot: Point) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }
}

style_builders!(Polygon { fill, stroke, joins, orient, style });

impl Draw for Polygon {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), StyleError> {
        let paint = self.style.resolve()?;

        crate::log::debug!(points = self.points.len(), orientation = %self.orientation, "draw polygon");

        draw_points(surface, &self.points, self.pivot, self.orientation, &paint, true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::style::LineJoin;
    use crate::surface::{RecordingSurface, SurfaceCall};
    use crate::types::pt;

    fn quad() -> Vec<Point> {
        vec![pt(100.0, 100.0), pt(50.0, 500.0), pt(600.0, 850.0), pt(750.0, 50.0)]
    }

    #[test]
    fn pivot_is_half_the_bbox_extent() {
        assert_eq!(span_pivot(&quad()), pt(350.0, 400.0));
        assert_eq!(span_pivot(&[]), Point::ZERO);
        assert_eq!(Lines::new(quad()).pivot(), pt(350.0, 400.0));
    }

    #[test]
    fn polygon_closes_and_fills_before_stroking() {
        let gold = Color::rgb8(255, 215, 0);
        let polygon = Polygon::new(quad()).fill_color(gold).line_width(5.0).orientation(30.0);

        let mut surface = RecordingSurface::new();
        polygon.draw(&mut surface).unwrap();

        assert_eq!(
            surface.path(),
            vec![
                &SurfaceCall::MoveTo(pt(100.0, 100.0)),
                &SurfaceCall::LineTo(pt(50.0, 500.0)),
                &SurfaceCall::LineTo(pt(600.0, 850.0)),
                &SurfaceCall::LineTo(pt(750.0, 50.0)),
                &SurfaceCall::ClosePath,
            ]
        );
        assert_eq!(surface.paints(), vec![&SurfaceCall::FillPreserve, &SurfaceCall::Stroke]);
        assert_eq!(surface.count(&SurfaceCall::SetLineJoin(LineJoin::Bevel)), 1);
    }

    #[test]
    fn lines_stay_open_and_unfilled() {
        let style = PaintStyle::new().fill_color(Color::WHITE).line_join("round");
        let lines = Lines::new(quad()).with_style(style);

        let mut surface = RecordingSurface::new();
        lines.draw(&mut surface).unwrap();

        assert!(!surface.calls().contains(&SurfaceCall::ClosePath));
        assert_eq!(surface.paints(), vec![&SurfaceCall::Stroke]);
    }

    #[test]
    fn explicit_pivot_is_fixed_by_rotation() {
        let polygon = Polygon::new(quad()).with_pivot(pt(100.0, 100.0)).orientation(90.0);
        let mut surface = RecordingSurface::new();
        polygon.draw(&mut surface).unwrap();

        let Some(SurfaceCall::Transform(m)) = surface.calls().get(1) else {
            panic!("expected transform");
        };
        assert!((m.apply(pt(100.0, 100.0)) - pt(100.0, 100.0)).length() < 1e-9);
    }

    #[test]
    fn empty_point_list_draws_nothing() {
        let mut surface = RecordingSurface::new();
        Polygon::new(Vec::new()).draw(&mut surface).unwrap();
        Lines::new(Vec::new()).draw(&mut surface).unwrap();
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn invalid_cap_is_an_error() {
        let mut surface = RecordingSurface::new();
        let err = Lines::new(quad()).line_cap("flat").draw(&mut surface);
        assert!(err.is_err());
        assert!(surface.calls().is_empty());
    }
}
