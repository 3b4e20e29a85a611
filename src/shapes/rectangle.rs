use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::dvec2;

use crate::errors::StyleError;
use crate::style::PaintStyle;
use crate::surface::Surface;
use crate::types::{Angle, Point};

use super::{Draw, draw_oriented};

/// An axis-aligned rectangle centered on `position`, rotated about its center
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub orientation: Angle,
    pub style: PaintStyle,
}

impl Rectangle {
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
            orientation: Angle::ZERO,
            style: PaintStyle::default(),
        }
    }

    /// Bottom-left corner in local (unrotated) coordinates
    pub fn corner(&self) -> Point {
        self.position - dvec2(self.width, self.height) / 2.0
    }
}

style_builders!(Rectangle { fill, stroke, joins, orient, style });

impl Draw for Rectangle {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), StyleError> {
        let paint = self.style.resolve()?;

        crate::log::debug!(width = self.width, height = self.height, orientation = %self.orientation, "draw rectangle");

        let corner = self.corner();
        let (w, h) = (self.width, self.height);
        draw_oriented(surface, self.orientation, self.position, &paint, |s| {
            s.move_to(corner);
            s.line_to(corner + dvec2(w, 0.0));
            s.line_to(corner + dvec2(w, h));
            s.line_to(corner + dvec2(0.0, h));
            s.close_path();
        });
        Ok(())
    }
}

/// A rectangle whose corners are quarter circles of `corner_radius`.
///
/// The radius is clamped to `[0, min(width, height) / 2]` when the shape is
/// built, so the corners never overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectangle {
    position: Point,
    width: f64,
    height: f64,
    corner_radius: f64,
    orientation: Angle,
    style: PaintStyle,
}

impl RoundedRectangle {
    pub fn new(position: Point, width: f64, height: f64, corner_radius: f64) -> Self {
        let max_radius = (width.min(height) / 2.0).max(0.0);
        let clamped = corner_radius.clamp(0.0, max_radius);
        if clamped != corner_radius {
            crate::log::warn!(requested = corner_radius, used = clamped, "corner radius clamped to fit");
        }

        Self {
            position,
            width,
            height,
            corner_radius: clamped,
            orientation: Angle::ZERO,
            style: PaintStyle::default(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The radius actually used, after clamping
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Arc centers, counter-clockwise from the `(+x, +y)` corner
    pub fn corner_centers(&self) -> [Point; 4] {
        let dx = self.width / 2.0 - self.corner_radius;
        let dy = self.height / 2.0 - self.corner_radius;
        let p = self.position;
        [p + dvec2(dx, dy), p + dvec2(-dx, dy), p + dvec2(-dx, -dy), p + dvec2(dx, -dy)]
    }
}

style_builders!(RoundedRectangle { fill, stroke, joins, orient, style });

impl Draw for RoundedRectangle {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), StyleError> {
        let paint = self.style.resolve()?;

        crate::log::debug!(
            width = self.width,
            height = self.height,
            corner_radius = self.corner_radius,
            orientation = %self.orientation,
            "draw rounded rectangle"
        );

        let p = self.position;
        let r = self.corner_radius;
        let (w2, h2) = (self.width / 2.0, self.height / 2.0);
        let [c1, c2, c3, c4] = self.corner_centers();

        // Counter-clockwise: each straight edge ends where the next corner's
        // quarter arc starts.
        draw_oriented(surface, self.orientation, p, &paint, |s| {
            s.move_to(p + dvec2(w2, h2 - r));
            s.arc(c1, r, 0.0, FRAC_PI_2);
            s.line_to(p + dvec2(-w2 + r, h2));
            s.arc(c2, r, FRAC_PI_2, PI);
            s.line_to(p + dvec2(-w2, -h2 + r));
            s.arc(c3, r, PI, 3.0 * FRAC_PI_2);
            s.line_to(p + dvec2(w2 - r, -h2));
            s.arc(c4, r, 3.0 * FRAC_PI_2, TAU);
            s.close_path();
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceCall};
    use crate::types::pt;

    #[test]
    fn rectangle_path_is_centered_on_position() {
        let rect = Rectangle::new(pt(500.0, 500.0), 700.0, 250.0).orientation(45.0);
        let mut surface = RecordingSurface::new();
        rect.draw(&mut surface).unwrap();

        assert_eq!(
            surface.path(),
            vec![
                &SurfaceCall::MoveTo(pt(150.0, 375.0)),
                &SurfaceCall::LineTo(pt(850.0, 375.0)),
                &SurfaceCall::LineTo(pt(850.0, 625.0)),
                &SurfaceCall::LineTo(pt(150.0, 625.0)),
                &SurfaceCall::ClosePath,
            ]
        );
        assert!(surface.is_balanced());
    }

    #[test]
    fn rectangle_rotates_about_its_center() {
        let rect = Rectangle::new(pt(10.0, 20.0), 4.0, 2.0).orientation(90.0);
        let mut surface = RecordingSurface::new();
        rect.draw(&mut surface).unwrap();

        let Some(SurfaceCall::Transform(m)) = surface.calls().get(1) else {
            panic!("expected transform");
        };
        assert!((m.apply(pt(10.0, 20.0)) - pt(10.0, 20.0)).length() < 1e-9);
        assert!((m.apply(pt(12.0, 20.0)) - pt(10.0, 22.0)).length() < 1e-9);
    }

    #[test]
    fn rectangle_passes_cap_and_join_through() {
        let rect = Rectangle::new(pt(0.0, 0.0), 1.0, 1.0).line_cap("square").line_join("round");
        let mut surface = RecordingSurface::new();
        rect.draw(&mut surface).unwrap();
        assert_eq!(surface.count(&SurfaceCall::SetLineCap(crate::style::LineCap::Square)), 1);
        assert_eq!(surface.count(&SurfaceCall::SetLineJoin(crate::style::LineJoin::Round)), 1);
    }

    #[test]
    fn rounded_corners_are_quarter_arcs() {
        let rr = RoundedRectangle::new(pt(0.0, 0.0), 10.0, 6.0, 1.0);
        let mut surface = RecordingSurface::new();
        rr.draw(&mut surface).unwrap();

        let arcs: Vec<_> = surface
            .calls()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Arc { center, radius, start_angle, end_angle } => {
                    Some((*center, *radius, end_angle - start_angle))
                }
                _ => None,
            })
            .collect();

        assert_eq!(arcs.len(), 4);
        let centers = [pt(4.0, 2.0), pt(-4.0, 2.0), pt(-4.0, -2.0), pt(4.0, -2.0)];
        for ((center, radius, sweep), expected) in arcs.iter().zip(centers) {
            assert_eq!(*center, expected);
            assert_eq!(*radius, 1.0);
            assert!((sweep - FRAC_PI_2).abs() < 1e-12);
        }
        assert_eq!(surface.path().first(), Some(&&SurfaceCall::MoveTo(pt(5.0, 2.0))));
        assert_eq!(surface.path().last(), Some(&&SurfaceCall::ClosePath));
    }

    #[test]
    fn edges_meet_the_arcs() {
        let rr = RoundedRectangle::new(pt(3.0, 3.0), 8.0, 4.0, 1.5);
        let mut surface = RecordingSurface::new();
        rr.draw(&mut surface).unwrap();

        let path = surface.path();
        // Each line_to lands where the previous arc ended
        for pair in path.windows(2) {
            if let (SurfaceCall::Arc { center, radius, end_angle, .. }, SurfaceCall::LineTo(p)) = (pair[0], pair[1]) {
                let arc_end = *center + dvec2(end_angle.cos(), end_angle.sin()) * *radius;
                let along = (*p - arc_end).normalize();
                let dist = (*p - arc_end).length();
                assert!(dist > 0.0);
                // The edge leaves the arc tangentially
                let tangent = dvec2(-end_angle.sin(), end_angle.cos());
                assert!((along - tangent).length() < 1e-9);
            }
        }
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let rr = RoundedRectangle::new(pt(0.0, 0.0), 10.0, 4.0, 5.0);
        assert_eq!(rr.corner_radius(), 2.0);
        assert_eq!(RoundedRectangle::new(pt(0.0, 0.0), 10.0, 4.0, -1.0).corner_radius(), 0.0);
    }
}
