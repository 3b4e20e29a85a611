use crate::color::Color;
use crate::style::{LineCap, LineJoin};
use crate::transform::Affine;
use crate::types::Point;

use super::Surface;

/// One call made on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Save,
    Restore,
    Transform(Affine),
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    ClosePath,
    SetSourceRgba(Color, f64),
    SetLineWidth(f64),
    SetDash(Vec<f64>),
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),
    FillPreserve,
    Stroke,
}

impl SurfaceCall {
    /// Whether this call builds the current path
    pub fn is_path(&self) -> bool {
        matches!(
            self,
            SurfaceCall::MoveTo(_) | SurfaceCall::LineTo(_) | SurfaceCall::Arc { .. } | SurfaceCall::ClosePath
        )
    }

    /// Whether this call paints
    pub fn is_paint(&self) -> bool {
        matches!(self, SurfaceCall::FillPreserve | SurfaceCall::Stroke)
    }
}

/// A surface that draws nothing and remembers every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    depth: usize,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the recorder empty
    pub fn take(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    /// Current save depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Every save was restored and no restore came without a save
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.unbalanced_restores == 0
    }

    /// Only the path-building calls
    pub fn path(&self) -> Vec<&SurfaceCall> {
        self.calls.iter().filter(|c| c.is_path()).collect()
    }

    /// Only the fill and stroke calls
    pub fn paints(&self) -> Vec<&SurfaceCall> {
        self.calls.iter().filter(|c| c.is_paint()).collect()
    }

    pub fn count(&self, call: &SurfaceCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    fn record(&mut self, call: SurfaceCall) {
        self.calls.push(call);
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.record(SurfaceCall::Save);
    }

    fn restore(&mut self) {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => self.unbalanced_restores += 1,
        }
        self.record(SurfaceCall::Restore);
    }

    fn transform(&mut self, matrix: Affine) {
        self.record(SurfaceCall::Transform(matrix));
    }

    fn move_to(&mut self, p: Point) {
        self.record(SurfaceCall::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.record(SurfaceCall::LineTo(p));
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.record(SurfaceCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.record(SurfaceCall::ClosePath);
    }

    fn set_source_rgba(&mut self, color: Color, alpha: f64) {
        self.record(SurfaceCall::SetSourceRgba(color, alpha));
    }

    fn set_line_width(&mut self, width: f64) {
        self.record(SurfaceCall::SetLineWidth(width));
    }

    fn set_dash(&mut self, dashes: &[f64]) {
        self.record(SurfaceCall::SetDash(dashes.to_vec()));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.record(SurfaceCall::SetLineCap(cap));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.record(SurfaceCall::SetLineJoin(join));
    }

    fn fill_preserve(&mut self) {
        self.record(SurfaceCall::FillPreserve);
    }

    fn stroke(&mut self) {
        self.record(SurfaceCall::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    #[test]
    fn unmatched_restore_is_unbalanced() {
        let mut surface = RecordingSurface::new();
        surface.restore();
        assert!(!surface.is_balanced());
    }

    #[test]
    fn filters_path_and_paint_calls() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.move_to(pt(0.0, 0.0));
        surface.line_to(pt(1.0, 0.0));
        surface.set_line_width(2.0);
        surface.stroke();
        surface.restore();

        assert_eq!(surface.path().len(), 2);
        assert_eq!(surface.paints(), vec![&SurfaceCall::Stroke]);
        assert_eq!(surface.count(&SurfaceCall::Save), 1);
        assert_eq!(surface.take().len(), 6);
        assert!(surface.calls().is_empty());
    }
}
