use std::f64::consts::TAU;

use glam::dvec2;
use lyon_geom::{Angle, CubicBezierSegment, point, vector};

use crate::color::Color;
use crate::style::{LineCap, LineJoin};
use crate::transform::Affine;
use crate::types::Point;

use super::Surface;

/// Transform and paint settings covered by save/restore
#[derive(Debug, Clone)]
struct GraphicsState {
    ctm: Affine,
    source: Color,
    alpha: f64,
    line_width: f64,
    dash: Vec<f64>,
    cap: LineCap,
    join: LineJoin,
}

impl GraphicsState {
    fn new(ctm: Affine) -> Self {
        Self {
            ctm,
            source: Color::BLACK,
            alpha: 1.0,
            line_width: 1.0,
            dash: Vec::new(),
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }

    /// Factor a user-space length grows by in device space (exact for
    /// rotations, mirrors, and uniform scales).
    fn length_scale(&self) -> f64 {
        self.ctm.determinant().abs().sqrt()
    }
}

/// A surface that turns each fill and stroke into an SVG `<path>` element.
///
/// Path coordinates are transformed as they are added, so the emitted
/// elements carry no `transform` attribute. Arcs are approximated with cubic
/// Béziers of at most a quarter turn each.
#[derive(Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<Color>,
    state: GraphicsState,
    stack: Vec<GraphicsState>,
    /// Path data of the current path, in device coordinates
    path: Vec<String>,
    current: Option<Point>,
    subpath_start: Option<Point>,
    elements: Vec<String>,
}

impl SvgSurface {
    /// A `width` × `height` canvas with the origin at the top left and y pointing down.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            state: GraphicsState::new(Affine::IDENTITY),
            stack: Vec::new(),
            path: Vec::new(),
            current: None,
            subpath_start: None,
            elements: Vec::new(),
        }
    }

    /// Put the origin at the bottom left with y pointing up.
    pub fn y_up(mut self) -> Self {
        self.state.ctm = Affine::new(1.0, 0.0, 0.0, -1.0, 0.0, self.height) * self.state.ctm;
        self
    }

    /// Paint the whole canvas with `color` underneath everything else.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Number of painted elements so far
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The SVG document
    pub fn render(&self) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        if let Some(bg) = self.background {
            out.push_str(&format!("  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n", bg));
        }
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    /// Consume the surface and return the SVG document
    pub fn finish(self) -> String {
        self.render()
    }

    fn device(&self, p: Point) -> Point {
        self.state.ctm.apply(p)
    }

    fn push_point(&mut self, cmd: char, device: Point) {
        self.path.push(format!("{} {},{}", cmd, fmt_num(device.x), fmt_num(device.y)));
    }

    fn clear_path(&mut self) {
        self.path.clear();
        self.current = None;
        self.subpath_start = None;
    }

    fn path_data(&self) -> String {
        self.path.join(" ")
    }

    fn opacity_attr(name: &str, alpha: f64) -> String {
        if alpha < 1.0 {
            format!(" {}=\"{}\"", name, fmt_num(alpha))
        } else {
            String::new()
        }
    }
}

impl Surface for SvgSurface {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    // The current path is dropped with the scope it was built in.
    fn restore(&mut self) {
        self.clear_path();
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => {
                crate::log::warn!("restore without matching save ignored");
            }
        }
    }

    fn transform(&mut self, matrix: Affine) {
        self.state.ctm = self.state.ctm * matrix;
    }

    fn move_to(&mut self, p: Point) {
        let d = self.device(p);
        self.push_point('M', d);
        self.current = Some(d);
        self.subpath_start = Some(d);
    }

    fn line_to(&mut self, p: Point) {
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        let d = self.device(p);
        self.push_point('L', d);
        self.current = Some(d);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        if !(start_angle.is_finite() && end_angle.is_finite() && radius.is_finite()) {
            crate::log::warn!(start_angle, end_angle, radius, "arc with non-finite parameters ignored");
            return;
        }

        let arc = lyon_geom::Arc {
            center: point(center.x, center.y),
            radii: vector(radius, radius),
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(arc_sweep(start_angle, end_angle)),
            x_rotation: Angle::zero(),
        };

        let from = arc.from();
        let start = dvec2(from.x, from.y);
        let device_start = self.device(start);
        match self.current {
            Some(current) if (current - device_start).length() < 1e-9 => {}
            Some(_) => self.line_to(start),
            None => self.move_to(start),
        }

        let mut segments = Vec::new();
        arc.for_each_cubic_bezier(&mut |s: &CubicBezierSegment<f64>| segments.push([s.ctrl1, s.ctrl2, s.to]));

        for [c1, c2, to] in segments {
            let c1 = self.device(dvec2(c1.x, c1.y));
            let c2 = self.device(dvec2(c2.x, c2.y));
            let end = self.device(dvec2(to.x, to.y));
            self.path.push(format!(
                "C {},{} {},{} {},{}",
                fmt_num(c1.x),
                fmt_num(c1.y),
                fmt_num(c2.x),
                fmt_num(c2.y),
                fmt_num(end.x),
                fmt_num(end.y)
            ));
            self.current = Some(end);
        }
    }

    fn close_path(&mut self) {
        if self.current.is_some() {
            self.path.push("Z".to_string());
            self.current = self.subpath_start;
        }
    }

    fn set_source_rgba(&mut self, color: Color, alpha: f64) {
        self.state.source = color;
        self.state.alpha = alpha;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_dash(&mut self, dashes: &[f64]) {
        self.state.dash = dashes.to_vec();
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.cap = cap;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.state.join = join;
    }

    fn fill_preserve(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let element = format!(
            "<path d=\"{}\" fill=\"{}\"{} stroke=\"none\"/>",
            self.path_data(),
            self.state.source,
            Self::opacity_attr("fill-opacity", self.state.alpha),
        );
        self.elements.push(element);
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let scale = self.state.length_scale();
        let dash = if self.state.dash.is_empty() {
            String::new()
        } else {
            let values: Vec<String> = self.state.dash.iter().map(|d| fmt_num(d * scale)).collect();
            format!(" stroke-dasharray=\"{}\"", values.join(","))
        };
        let element = format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\"{} stroke-width=\"{}\"{} stroke-linecap=\"{}\" stroke-linejoin=\"{}\"/>",
            self.path_data(),
            self.state.source,
            Self::opacity_attr("stroke-opacity", self.state.alpha),
            fmt_num(self.state.line_width * scale),
            dash,
            self.state.cap.name(),
            self.state.join.name(),
        );
        self.elements.push(element);
        self.clear_path();
    }
}

/// Counter-clockwise sweep from `start` to `end`, in `[0, TAU]`.
///
/// Angles a whole number of turns apart sweep a full turn when `end` is
/// ahead of `start` and nothing otherwise.
fn arc_sweep(start: f64, end: f64) -> f64 {
    let sweep = (end - start).rem_euclid(TAU);
    if sweep == 0.0 && end > start { TAU } else { sweep }
}

/// Format a coordinate with at most three decimals, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.3}", rounded);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
