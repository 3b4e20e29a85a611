//! The drawing surface shapes are emitted onto.
//!
//! A [`Surface`] is a stateful immediate-mode 2D canvas in the style of cairo:
//! paths are built with `move_to`/`line_to`/`arc`/`close_path`, painted with
//! `fill_preserve` and `stroke`, and the transform and paint settings can be
//! pushed with `save` and popped with `restore`.

/// Records every call, for tests and inspection.
mod recording;
/// A vector backend producing SVG markup.
mod svg;

pub use recording::{RecordingSurface, SurfaceCall};
pub use svg::SvgSurface;

use std::ops::{Deref, DerefMut};

use crate::color::Color;
use crate::style::{LineCap, LineJoin};
use crate::transform::Affine;
use crate::types::Point;

/// A stateful path-drawing canvas.
///
/// Angles are in radians in the standard mathematical orientation. Path
/// coordinates are user coordinates: they pass through the current transform,
/// which [`Surface::transform`] composes with (the new matrix is applied to
/// points before the existing one).
pub trait Surface {
    /* Transform and state stack */

    /// Push the current transform and paint settings.
    fn save(&mut self);
    /// Pop what the matching [`Surface::save`] pushed.
    fn restore(&mut self);
    /// Compose `matrix` into the current transform.
    fn transform(&mut self, matrix: Affine);

    /* Path construction */

    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    /// Circular arc from `start_angle` to `end_angle`, counter-clockwise in
    /// user space. Joins the current point with a straight segment if there is one.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);
    fn close_path(&mut self);

    /* Paint settings */

    fn set_source_rgba(&mut self, color: Color, alpha: f64);
    fn set_line_width(&mut self, width: f64);
    /// Alternating on/off lengths; an empty slice means a continuous line.
    fn set_dash(&mut self, dashes: &[f64]);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);

    /* Painting */

    /// Fill the current path and keep it for a following stroke.
    fn fill_preserve(&mut self);
    /// Stroke the current path and clear it.
    fn stroke(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn save(&mut self) {
        (**self).save()
    }

    #[inline]
    fn restore(&mut self) {
        (**self).restore()
    }

    #[inline]
    fn transform(&mut self, matrix: Affine) {
        (**self).transform(matrix)
    }

    #[inline]
    fn move_to(&mut self, p: Point) {
        (**self).move_to(p)
    }

    #[inline]
    fn line_to(&mut self, p: Point) {
        (**self).line_to(p)
    }

    #[inline]
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        (**self).arc(center, radius, start_angle, end_angle)
    }

    #[inline]
    fn close_path(&mut self) {
        (**self).close_path()
    }

    #[inline]
    fn set_source_rgba(&mut self, color: Color, alpha: f64) {
        (**self).set_source_rgba(color, alpha)
    }

    #[inline]
    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width)
    }

    #[inline]
    fn set_dash(&mut self, dashes: &[f64]) {
        (**self).set_dash(dashes)
    }

    #[inline]
    fn set_line_cap(&mut self, cap: LineCap) {
        (**self).set_line_cap(cap)
    }

    #[inline]
    fn set_line_join(&mut self, join: LineJoin) {
        (**self).set_line_join(join)
    }

    #[inline]
    fn fill_preserve(&mut self) {
        (**self).fill_preserve()
    }

    #[inline]
    fn stroke(&mut self) {
        (**self).stroke()
    }
}

/// Saves the surface state on creation and restores it when dropped, so the
/// state stack stays balanced on every exit path, unwinding included.
pub struct SurfaceGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SurfaceGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    #[test]
    fn guard_restores_on_drop() {
        let mut surface = RecordingSurface::new();
        {
            let mut guard = SurfaceGuard::new(&mut surface);
            guard.move_to(pt(1.0, 2.0));
            assert_eq!(guard.depth(), 1);
        }
        assert_eq!(
            surface.calls(),
            &[SurfaceCall::Save, SurfaceCall::MoveTo(pt(1.0, 2.0)), SurfaceCall::Restore]
        );
        assert!(surface.is_balanced());
    }

    #[test]
    fn guard_restores_on_early_return() {
        fn fails(surface: &mut dyn Surface, bail: bool) -> Result<(), &'static str> {
            let mut guard = SurfaceGuard::new(surface);
            guard.line_to(pt(0.0, 0.0));
            if bail {
                return Err("bail");
            }
            guard.stroke();
            Ok(())
        }

        let mut surface = RecordingSurface::new();
        assert!(fails(&mut surface, true).is_err());
        assert!(surface.is_balanced());
        assert_eq!(surface.calls().last(), Some(&SurfaceCall::Restore));
    }

    #[test]
    fn mut_ref_forwards() {
        let mut surface = RecordingSurface::new();
        {
            let mut by_ref = &mut surface;
            Surface::close_path(&mut by_ref);
        }
        assert_eq!(surface.calls(), &[SurfaceCall::ClosePath]);
    }
}
