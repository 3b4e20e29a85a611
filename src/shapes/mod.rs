//! Shape descriptors and how they are drawn.
//!
//! Each shape is its own type holding its parameters, a [`PaintStyle`], and an
//! orientation. Geometry derived from the parameters (polygon and star
//! vertices, arrow heads, the pivot of point lists) is computed once when the
//! shape is built. Drawing:
//! - resolves the style, so an unknown style name fails before any surface call
//! - saves the surface and applies the rotation about the shape's pivot
//! - emits the outline path
//! - fills then strokes it, and restores the surface

use crate::errors::StyleError;
use crate::paint::apply_paint;
use crate::style::ResolvedStyle;
use crate::surface::{Surface, SurfaceGuard};
use crate::transform::rotate_around_point;
use crate::types::{Angle, Point};

/// Builder methods over a type's `style` (and `orientation`) fields.
macro_rules! style_builders {
    (@fill) => {
        /// Fill color; `None` leaves the shape unfilled
        pub fn fill_color(mut self, color: impl Into<Option<$crate::color::Color>>) -> Self {
            self.style.fill_color = color.into();
            self
        }
    };
    (@stroke) => {
        /// Outline color; `None` leaves the outline unstroked
        pub fn line_color(mut self, color: impl Into<Option<$crate::color::Color>>) -> Self {
            self.style.line_color = color.into();
            self
        }

        pub fn no_line(mut self) -> Self {
            self.style.line_color = None;
            self
        }

        pub fn line_width(mut self, width: f64) -> Self {
            self.style.line_width = width;
            self
        }

        /// `solid`, `dashed`, `dotted`, `dash-dot` (or `-`, `--`, `.`, `-.`)
        pub fn line_style(mut self, style: impl ToString) -> Self {
            self.style.line_style = style.to_string();
            self
        }

        pub fn opacity(mut self, opacity: f64) -> Self {
            self.style.opacity = opacity;
            self
        }
    };
    (@joins) => {
        /// `square`, `round`, or `butt`
        pub fn line_cap(mut self, cap: impl ToString) -> Self {
            self.style.line_cap = cap.to_string();
            self
        }

        /// `bevel`, `round`, or `miter`
        pub fn line_join(mut self, join: impl ToString) -> Self {
            self.style.line_join = join.to_string();
            self
        }
    };
    (@orient) => {
        /// Rotation about the shape's pivot, in degrees
        pub fn orientation(mut self, degrees: impl Into<$crate::types::Angle>) -> Self {
            self.orientation = degrees.into();
            self
        }
    };
    (@style) => {
        /// Replace the whole paint style
        pub fn with_style(mut self, style: $crate::style::PaintStyle) -> Self {
            self.style = style;
            self
        }

        pub fn style(&self) -> &$crate::style::PaintStyle {
            &self.style
        }
    };
    ($ty:ty { $($group:ident),* $(,)? }) => {
        impl $ty {
            $( style_builders!(@$group); )*
        }
    };
}

mod arrow;
mod circle;
mod polyline;
mod rectangle;
mod regular;

pub use arrow::{Arrow, ArrowBuilder, HeadStyle};
pub use circle::Circle;
pub use polyline::{Lines, Polygon};
pub use rectangle::{Rectangle, RoundedRectangle};
pub use regular::{RegularPolygon, Star, regular_polygon_vertices, star_vertices};

use enum_dispatch::enum_dispatch;

/// Something that can be drawn onto a [`Surface`].
#[enum_dispatch]
pub trait Draw {
    /// Emit the shape's path and paint it.
    ///
    /// Fails only when the paint style names an unknown line style, cap, or
    /// join, in which case the surface is not touched at all.
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), StyleError>;
}

/// Any of the drawable shapes
#[enum_dispatch(Draw)]
#[derive(Debug, Clone)]
pub enum Shape {
    Circle,
    Rectangle,
    RoundedRectangle,
    Lines,
    Polygon,
    RegularPolygon,
    Star,
    Arrow,
}

/// Save the surface, rotate by `orientation` about `pivot`, emit the path,
/// paint it, and restore.
pub(crate) fn draw_oriented(
    surface: &mut dyn Surface,
    orientation: Angle,
    pivot: Point,
    paint: &ResolvedStyle,
    emit: impl FnOnce(&mut dyn Surface),
) {
    let mut guard = SurfaceGuard::new(surface);
    guard.transform(rotate_around_point(orientation.radians(), pivot));
    emit(&mut *guard);
    apply_paint(&mut *guard, paint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceCall};
    use crate::types::pt;

    #[test]
    fn shape_enum_dispatches_to_variant() {
        let shapes: Vec<Shape> = vec![
            Circle::new(10.0, pt(0.0, 0.0)).into(),
            Rectangle::new(pt(0.0, 0.0), 4.0, 2.0).into(),
            Star::new(5, 10.0, 4.0, pt(0.0, 0.0)).into(),
        ];

        let mut surface = RecordingSurface::new();
        for shape in &shapes {
            shape.draw(&mut surface).unwrap();
        }

        assert_eq!(surface.count(&SurfaceCall::Save), 3);
        assert_eq!(surface.count(&SurfaceCall::Stroke), 3);
        assert!(surface.is_balanced());
    }

    #[test]
    fn draw_oriented_brackets_with_save_restore() {
        let paint = crate::style::PaintStyle::none().resolve().unwrap();
        let mut surface = RecordingSurface::new();
        draw_oriented(&mut surface, Angle::degrees(90.0), pt(1.0, 1.0), &paint, |s| s.move_to(pt(2.0, 1.0)));

        let calls = surface.calls();
        assert_eq!(calls.first(), Some(&SurfaceCall::Save));
        assert!(matches!(calls[1], SurfaceCall::Transform(_)));
        assert_eq!(calls[2], SurfaceCall::MoveTo(pt(2.0, 1.0)));
        assert_eq!(calls.last(), Some(&SurfaceCall::Restore));
    }
}
