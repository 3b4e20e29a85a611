//! Fill and stroke of the path currently held by a surface.

use crate::errors::StyleError;
use crate::style::{PaintStyle, ResolvedStyle};
use crate::surface::Surface;

/// Check `style` and paint the current path with it.
///
/// Nothing is sent to the surface if the style has an unknown option name.
pub fn paint_path<S: Surface + ?Sized>(surface: &mut S, style: &PaintStyle) -> Result<(), StyleError> {
    let resolved = style.resolve()?;
    apply_paint(surface, &resolved);
    Ok(())
}

/// Paint the current path: fill first (keeping the path), then stroke.
///
/// With neither a fill nor a line color this does nothing.
pub fn apply_paint<S: Surface + ?Sized>(surface: &mut S, style: &ResolvedStyle) {
    if let Some(fill) = style.fill_color {
        surface.set_source_rgba(fill, style.opacity);
        surface.fill_preserve();
    }

    if let Some(line) = style.line_color {
        surface.set_source_rgba(line, style.opacity);
        surface.set_line_width(style.line_width);
        surface.set_dash(&style.dash_pattern());
        surface.set_line_cap(style.effective_cap());
        surface.set_line_join(style.line_join);
        surface.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::style::{LineCap, LineJoin};
    use crate::surface::{RecordingSurface, SurfaceCall};

    #[test]
    fn fill_then_stroke() {
        let gold = Color::rgb8(255, 215, 0);
        let red = Color::rgb8(178, 34, 34);
        let style = PaintStyle::new()
            .fill_color(gold)
            .line_color(red)
            .line_width(7.0)
            .line_style("--")
            .line_join("bevel")
            .opacity(0.5);

        let mut surface = RecordingSurface::new();
        paint_path(&mut surface, &style).unwrap();

        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::SetSourceRgba(gold, 0.5),
                SurfaceCall::FillPreserve,
                SurfaceCall::SetSourceRgba(red, 0.5),
                SurfaceCall::SetLineWidth(7.0),
                SurfaceCall::SetDash(vec![28.0, 7.0]),
                SurfaceCall::SetLineCap(LineCap::Butt),
                SurfaceCall::SetLineJoin(LineJoin::Bevel),
                SurfaceCall::Stroke,
            ]
        );
    }

    #[test]
    fn dotted_stroke_uses_round_cap() {
        for cap in ["butt", "square", "round"] {
            let mut surface = RecordingSurface::new();
            let style = PaintStyle::new().line_style("dotted").line_cap(cap).line_width(5.0);
            paint_path(&mut surface, &style).unwrap();

            assert_eq!(surface.count(&SurfaceCall::SetLineCap(LineCap::Round)), 1);
            assert_eq!(surface.count(&SurfaceCall::SetDash(vec![0.0, 10.0])), 1);
        }
    }

    #[test]
    fn invalid_join_touches_nothing() {
        let mut surface = RecordingSurface::new();
        let style = PaintStyle::new().fill_color(Color::WHITE).line_join("mitre");

        let err = paint_path(&mut surface, &style).unwrap_err();
        assert!(matches!(err, StyleError::InvalidStyleOption { .. }));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn nothing_to_paint_is_not_an_error() {
        let mut surface = RecordingSurface::new();
        paint_path(&mut surface, &PaintStyle::none()).unwrap();
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn fill_only() {
        let mut surface = RecordingSurface::new();
        let style = PaintStyle::none().fill_color(Color::BLACK);
        paint_path(&mut surface, &style).unwrap();
        assert_eq!(surface.paints(), vec![&SurfaceCall::FillPreserve]);
    }
}
