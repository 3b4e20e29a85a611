//! Small geometric value types shared by the shapes and surfaces.

use std::fmt;

use glam::{DVec2, dvec2};

/// A point (or displacement) in surface coordinates.
pub type Point = DVec2;

/// Shorthand for building a [`Point`].
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    dvec2(x, y)
}

/// Angle in degrees, as shapes take their orientation.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Create an angle from degrees
    #[inline]
    pub const fn degrees(deg: f64) -> Angle {
        Angle(deg)
    }

    /// The angle in radians
    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl From<f64> for Angle {
    fn from(deg: f64) -> Self {
        Angle(deg)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: dvec2(f64::MAX, f64::MAX),
            max: dvec2(f64::MIN, f64::MIN),
        }
    }

    /// Bounding box of a point set
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut bb = BBox::new();
        for p in points {
            bb.expand_point(*p);
        }
        bb
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the center point
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    /// Half of the width and height, as a point.
    ///
    /// This is a size measured from the origin, not from `min`: for a box that
    /// does not touch the origin it is not the center.
    pub fn half_span(&self) -> Point {
        dvec2(self.width(), self.height()) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_converts_to_radians() {
        assert!((Angle::degrees(180.0).radians() - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(Angle::ZERO.radians(), 0.0);
    }

    #[test]
    fn bbox_new_is_empty() {
        assert!(BBox::new().is_empty());
    }

    #[test]
    fn bbox_from_points() {
        let points = [pt(100.0, 100.0), pt(50.0, 500.0), pt(600.0, 850.0), pt(750.0, 50.0)];
        let bb = BBox::from_points(&points);

        assert!(!bb.is_empty());
        assert_eq!(bb.min, pt(50.0, 50.0));
        assert_eq!(bb.max, pt(750.0, 850.0));
        assert_eq!(bb.width(), 700.0);
        assert_eq!(bb.height(), 800.0);
        assert_eq!(bb.center(), pt(400.0, 450.0));
    }

    #[test]
    fn half_span_ignores_the_min_corner() {
        let bb = BBox::from_points(&[pt(100.0, 200.0), pt(300.0, 600.0)]);
        assert_eq!(bb.half_span(), pt(100.0, 200.0));
        assert_ne!(bb.half_span(), bb.center());
    }
}
