//! Parametric 2D shapes drawn onto an immediate-mode path surface.
//!
//! A shape is a small descriptor (a [`Circle`], a [`Star`], an [`Arrow`], ...)
//! carrying its geometry, a [`PaintStyle`], and an orientation. Calling
//! [`Draw::draw`] emits its outline onto any [`Surface`] and fills and strokes
//! it there, rotated about the shape's pivot.
//!
//! ```
//! use cutout::{Color, Draw, Star, SvgSurface, pt};
//!
//! let gold: Color = "gold".parse()?;
//! let star = Star::new(5, 300.0, 150.0, pt(500.0, 500.0))
//!     .orientation(-18.0)
//!     .fill_color(gold)
//!     .line_width(5.0);
//!
//! let mut surface = SvgSurface::new(1000.0, 1000.0).y_up();
//! star.draw(&mut surface)?;
//! assert!(surface.finish().contains("<path"));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod color;
pub mod defaults;
pub mod errors;
pub mod log;
pub mod paint;
pub mod shapes;
pub mod style;
pub mod surface;
pub mod transform;
pub mod types;

pub use color::Color;
pub use errors::{ColorError, StyleError, StyleField};
pub use paint::{apply_paint, paint_path};
pub use shapes::{
    Arrow, ArrowBuilder, Circle, Draw, HeadStyle, Lines, Polygon, Rectangle, RegularPolygon, RoundedRectangle, Shape,
    Star, regular_polygon_vertices, star_vertices,
};
pub use style::{LineCap, LineJoin, LineStyle, PaintStyle, ResolvedStyle};
pub use surface::{RecordingSurface, Surface, SurfaceCall, SurfaceGuard, SvgSurface};
pub use transform::{Affine, Transform, rotate_around_point};
pub use types::{Angle, BBox, Point, pt};
