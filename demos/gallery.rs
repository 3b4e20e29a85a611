//! Draw one of the sample scenes and print it as SVG.
//!
//! ```text
//! cargo run --example gallery --features tracing -- star > star.svg
//! ```

use std::f64::consts::PI;

use cutout::{
    Arrow, Circle, Color, Draw, HeadStyle, Lines, Polygon, Rectangle, RegularPolygon, RoundedRectangle, Shape, Star,
    SvgSurface, pt,
};
use miette::miette;
use tracing_subscriber::EnvFilter;

const SIZE: f64 = 1000.0;
const SCENES: &[&str] = &["circle", "rectangle", "rounded", "lines", "polygon", "regular_polygon", "star", "arrow"];

fn color(name: &str) -> miette::Result<Color> {
    Ok(name.parse()?)
}

fn scene(name: &str) -> miette::Result<(Color, Vec<Shape>)> {
    let white = color("white")?;
    let shapes: Vec<Shape> = match name {
        "circle" => vec![
            Circle::new(100.0, pt(500.0, 500.0))
                .orientation(55.0)
                .line_color(color("firebrick")?)
                .line_width(5.0)
                .line_style("-")
                .fill_color(color("gold")?)
                .into(),
        ],
        "rectangle" => vec![
            Rectangle::new(pt(500.0, 500.0), 700.0, 250.0)
                .orientation(45.0)
                .line_width(5.0)
                .line_style(".")
                .line_join("round")
                .fill_color(color("forestgreen")?)
                .into(),
        ],
        "rounded" => vec![
            RoundedRectangle::new(pt(500.0, 500.0), 600.0, 300.0, 60.0)
                .orientation(-20.0)
                .line_color(color("navy")?)
                .line_width(8.0)
                .fill_color(color("lightsteelblue")?)
                .into(),
        ],
        "lines" => {
            let points = (0..1000).map(|i| {
                let x = 4.0 * PI * i as f64 / 999.0;
                let y = x * x.sin();
                pt(SIZE / (4.0 * PI) * x, SIZE / 2.0 + SIZE * 0.04 * y)
            });
            vec![Lines::new(points).line_color(color("firebrick")?).line_width(3.0).into()]
        }
        "polygon" => vec![
            Polygon::new([pt(100.0, 100.0), pt(50.0, 500.0), pt(600.0, 850.0), pt(750.0, 50.0)])
                .fill_color(color("gold")?)
                .line_color(color("firebrick")?)
                .line_style("--")
                .line_width(7.0)
                .into(),
        ],
        "regular_polygon" => vec![
            RegularPolygon::new(5, 250.0, pt(500.0, 500.0))
                .orientation(90.0)
                .fill_color(color("gold")?)
                .line_style(".")
                .line_width(10.0)
                .into(),
        ],
        "star" => vec![
            Star::new(5, 250.0, 100.0, pt(500.0, 500.0))
                .fill_color(color("gold")?)
                .line_color(color("red")?)
                .line_width(10.0)
                .line_join("round")
                .into(),
        ],
        "arrow" => {
            let gold = color("gold")?;
            let n = 36;
            let arrows = (0..n).map(|i| {
                let angle = i as f64 * 2.0 * PI / n as f64;
                let shrink = (n - i) as f64 / n as f64;
                let vector = pt(angle.cos(), angle.sin()) * 500.0 * shrink;
                let arrow = Arrow::builder(pt(500.0, 500.0), vector)
                    .head_style(HeadStyle::Arrow)
                    .head_length(0.1)
                    .head_width(0.05)
                    .min_head_length(20.0)
                    .line_color(gold)
                    .line_style(".")
                    .line_width(3.0)
                    .build();
                Shape::from(arrow)
            });
            return Ok((color("black")?, arrows.collect()));
        }
        other => {
            return Err(miette!(
                help = format!("available scenes: {}", SCENES.join(", ")),
                "unknown scene `{}`",
                other
            ));
        }
    };
    Ok((white, shapes))
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "star".to_string());
    let (background, shapes) = scene(&name)?;

    let mut surface = SvgSurface::new(SIZE, SIZE).y_up().with_background(background);
    for shape in &shapes {
        shape.draw(&mut surface)?;
    }

    tracing::info!(scene = %name, elements = surface.element_count(), "rendered");

    print!("{}", surface.finish());
    Ok(())
}
