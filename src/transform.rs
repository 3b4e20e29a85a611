//! Affine transform construction.
//!
//! Shapes are oriented by rotating their local geometry about a pivot. The
//! rotation is built as a 3×3 homogeneous matrix and handed to the surface in
//! the six-coefficient `(a, b, c, d, e, f)` form, which maps to the matrix
//!
//! ```text
//! | a  c  e |
//! | b  d  f |
//! | 0  0  1 |
//! ```

use std::ops::Mul;

use glam::{DMat3, dvec2};

use crate::types::Point;

/// A 3×3 homogeneous transform whose bottom row is always `(0, 0, 1)`.
///
/// Only affine constructors are exposed, so the projective row never changes.
/// Composition with `*` follows matrix order: in `a * b`, `b` is applied first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(DMat3);

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform(DMat3::IDENTITY);

    /// Translation by `offset`
    pub fn translation(offset: Point) -> Self {
        Transform(DMat3::from_translation(offset))
    }

    /// Counter-clockwise rotation about the origin, in radians
    pub fn rotation(angle: f64) -> Self {
        Transform(DMat3::from_angle(angle))
    }

    /// Non-uniform scale about the origin
    pub fn scale(sx: f64, sy: f64) -> Self {
        Transform(DMat3::from_scale(dvec2(sx, sy)))
    }

    /// Apply `self` first, then `next`.
    pub fn then(self, next: Transform) -> Transform {
        next * self
    }

    /// Map a point through the transform
    pub fn apply(&self, p: Point) -> Point {
        self.0.transform_point2(p)
    }

    /// The underlying column-major matrix
    pub fn matrix(&self) -> DMat3 {
        self.0
    }

    /// Six-coefficient form consumed by surfaces.
    ///
    /// glam stores columns, so `b` is the second entry of the first column and
    /// `c` the first entry of the second. Swapping them transposes the linear
    /// part.
    pub fn to_affine(&self) -> Affine {
        let m = &self.0;
        Affine {
            a: m.x_axis.x,
            b: m.x_axis.y,
            c: m.y_axis.x,
            d: m.y_axis.y,
            e: m.z_axis.x,
            f: m.z_axis.y,
        }
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform(self.0 * rhs.0)
    }
}

impl From<Transform> for Affine {
    fn from(t: Transform) -> Self {
        t.to_affine()
    }
}

/// Build the transform that rotates by `angle` radians around `pivot`.
///
/// Composed as `translate(+pivot) * rotate(angle) * translate(-pivot)`, so the
/// pivot maps to itself.
pub fn rotate_around_point(angle: f64, pivot: Point) -> Affine {
    let t = Transform::translation(pivot) * Transform::rotation(angle) * Transform::translation(-pivot);
    t.to_affine()
}

/// Six-coefficient affine transform, `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Affine { a, b, c, d, e, f }
    }

    /// Map a point
    pub fn apply(&self, p: Point) -> Point {
        dvec2(self.a * p.x + self.c * p.y + self.e, self.b * p.x + self.d * p.y + self.f)
    }

    pub fn as_coeffs(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }
}

impl Mul for Affine {
    type Output = Affine;

    /// `self * rhs` applies `rhs` first.
    fn mul(self, rhs: Affine) -> Affine {
        Affine {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }
}
