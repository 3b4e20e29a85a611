use std::f64::consts::TAU;

use glam::dvec2;

use crate::defaults;
use crate::errors::StyleError;
use crate::style::PaintStyle;
use crate::surface::Surface;
use crate::types::{Angle, Point};

use super::Draw;
use super::polyline::draw_points;

/// Vertices of a regular `n_faces`-gon inscribed in a circle of `radius`.
///
/// The first vertex lies on the +x axis; the rest follow counter-clockwise.
pub fn regular_polygon_vertices(n_faces: usize, radius: f64, center: Point) -> Vec<Point> {
    let step = TAU / n_faces as f64;
    (0..n_faces)
        .map(|k| {
            let angle = k as f64 * step;
            center + dvec2(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Vertices of an `n_points` star, alternating outer and inner points.
///
/// Outer points sit at `k * 2π/n` on the exterior circle, inner points halfway
/// between them on the interior circle.
pub fn star_vertices(n_points: usize, exterior_radius: f64, interior_radius: f64, center: Point) -> Vec<Point> {
    let step = TAU / n_points as f64;
    let mut vertices = Vec::with_capacity(2 * n_points);
    for k in 0..n_points {
        let outer = k as f64 * step;
        let inner = outer + step / 2.0;
        vertices.push(center + dvec2(outer.cos(), outer.sin()) * exterior_radius);
        vertices.push(center + dvec2(inner.cos(), inner.sin()) * interior_radius);
    }
    vertices
}

fn closed_shape_style() -> PaintStyle {
    PaintStyle {
        line_join: defaults::PATH_LINE_JOIN.to_string(),
        ..PaintStyle::default()
    }
}

/// Regular polygon centered on `position`
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    n_faces: usize,
    radius: f64,
    position: Point,
    vertices: Vec<Point>,
    orientation: Angle,
    style: PaintStyle,
}

impl RegularPolygon {
    pub fn new(n_faces: usize, radius: f64, position: Point) -> Self {
        Self {
            n_faces,
            radius,
            position,
            vertices: regular_polygon_vertices(n_faces, radius, position),
            orientation: Angle::ZERO,
            style: closed_shape_style(),
        }
    }

    pub fn n_faces(&self) -> usize {
        self.n_faces
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

style_builders!(RegularPolygon { fill, stroke, joins, orient, style });

impl Draw for RegularPolygon {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), StyleError> {
        let paint = self.style.resolve()?;

        crate::log::debug!(
            n_faces = self.n_faces,
            radius = self.radius,
            orientation = %self.orientation,
            "draw regular polygon"
        );

        draw_points(surface, &self.vertices, self.position, self.orientation, &paint, true);
        Ok(())
    }
}

/// Star centered on `position`
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    n_points: usize,
    exterior_radius: f64,
    interior_radius: f64,
    position: Point,
    vertices: Vec<Point>,
    orientation: Angle,
    style: PaintStyle,
}

impl Star {
    pub fn new(n_points: usize, exterior_radius: f64, interior_radius: f64, position: Point) -> Self {
        Self {
            n_points,
            exterior_radius,
            interior_radius,
            position,
            vertices: star_vertices(n_points, exterior_radius, interior_radius, position),
            orientation: Angle::ZERO,
            style: closed_shape_style(),
        }
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn exterior_radius(&self) -> f64 {
        self.exterior_radius
    }

    pub fn interior_radius(&self) -> f64 {
        self.interior_radius
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

style_builders!(Star { fill, stroke, joins, orient, style });

impl Draw for Star {
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), StyleError> {
        let paint = self.style.resolve()?;

        crate::log::debug!(
            n_points = self.n_points,
            exterior_radius = self.exterior_radius,
            interior_radius = self.interior_radius,
            orientation = %self.orientation,
            "draw star"
        );

        draw_points(surface, &self.vertices, self.position, self.orientation, &paint, true);
        Ok(())
    }
}
