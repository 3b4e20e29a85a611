//! Default style and arrow settings

use crate::color::Color;
use crate::style::{LineCap, LineJoin, LineStyle};

pub const LINE_COLOR: Color = Color::BLACK;
pub const LINE_WIDTH: f64 = 1.0;
pub const LINE_STYLE: LineStyle = LineStyle::Solid;
pub const LINE_CAP: LineCap = LineCap::Butt;
/// Join for box-like shapes (circle, rectangles)
pub const BOX_LINE_JOIN: LineJoin = LineJoin::Miter;
/// Join for point-list shapes (lines, polygons, stars)
pub const PATH_LINE_JOIN: LineJoin = LineJoin::Bevel;
pub const OPACITY: f64 = 1.0;

pub const ARROW_HEAD_LENGTH: f64 = 0.1;
pub const ARROW_HEAD_WIDTH: f64 = 0.1;
/// Where the notch of an `Arrow`-style head sits, as a fraction of the head length
pub const ARROW_NOTCH_DEPTH: f64 = 0.8;
