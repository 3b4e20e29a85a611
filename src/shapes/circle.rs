use std::f64::consts::TAU;

use crate::defaults;
use crate::errors::StyleError;
use crate::style::PaintStyle;
use crate::surface::Surface;
use crate::types::{Angle, Point};

use super::{Draw, draw_oriented};

/// A circle
///
/// The stroke always uses butt caps and miter joins; a closed circle shows
/// neither, so the style's own cap and join are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub position: Point,
    pub orientation: Angle,
    pub style: PaintStyle,
}

impl Circle {
    pub fn new(radius: f64, position: Point) -> Self {
        Self {
            radius,
            position,
            orientation: Angle::ZERO,
            style: PaintStyle::default(),
        }
    }
}

style_builders!(Circle { fill, stroke, orient, style });

impl Draw for Circle {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), StyleError> {
        let paint = PaintStyle {
            line_cap: defaults::LINE_CAP.to_string(),
            line_join: defaults::BOX_LINE_JOIN.to_string(),
            ..self.style.clone()
        }
        .resolve()?;

        crate::log::debug!(
            radius = self.radius,
            x = self.position.x,
            y = self.position.y,
            orientation = %self.orientation,
            "draw circle"
        );

        // Rotation about the center leaves the outline in place
        draw_oriented(surface, self.orientation, self.position, &paint, |s| {
            s.arc(self.position, self.radius, 0.0, TAU)
        });
        Ok(())
    }
}
