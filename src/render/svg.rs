//! SVG output: the compositor expressed as vector primitives.
//!
//! Emits one element per dark module: `<rect>` for squares, gapped squares,
//! and bars, `<rect rx=...>` for rounded modules, `<circle>` for circles.
//! Module colors come from the same color source as the raster path, so a
//! gradient render looks identical in both formats.

use std::fmt::Write;

use crate::color::Rgba;
use crate::error::EstiloError;
use crate::matrix::Matrix;
use crate::render::{image_side, module_origin};
use crate::style::{ModuleShape, StyleConfig};

/// Render a module matrix to SVG markup under the given style.
///
/// Logo overlay and image fills need per-pixel raster sampling and are
/// rejected here; [`crate::generate`] routes those modes to PNG.
pub fn render_svg(matrix: &Matrix, style: &StyleConfig) -> Result<String, EstiloError> {
    style.validate()?;
    if style.logo.is_some() || style.background_image.is_some() {
        return Err(EstiloError::InvalidStyleValue {
            field: "output_format",
            value: "svg".to_string(),
            expected: "png for logo or image-fill renders".to_string(),
        });
    }

    let n = matrix.size();
    let side = image_side(n, style.size, style.border);

    let mut out = String::new();
    out += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
         width=\"{side}\" height=\"{side}\" viewBox=\"0 0 {side} {side}\" \
         shape-rendering=\"crispEdges\">"
    );

    if !style.transparent {
        let _ = writeln!(
            out,
            "\t<rect width=\"100%\" height=\"100%\" {}/>",
            fill_attrs(style.bg_color)
        );
    }

    for row in 0..n {
        for col in 0..n {
            if !matrix.get(row, col) {
                continue;
            }
            let color = crate::gradient::color_at(style, row, col, n);
            out.push('\t');
            out += &module_element(row, col, style, color);
            out.push('\n');
        }
    }

    out += "</svg>\n";
    Ok(out)
}

/// SVG fill attributes for a color, including opacity when not fully opaque.
fn fill_attrs(color: Rgba) -> String {
    if color.a == 255 {
        format!("fill=\"{}\"", color.css())
    } else {
        format!(
            "fill=\"{}\" fill-opacity=\"{:.3}\"",
            color.css(),
            color.a as f32 / 255.0
        )
    }
}

/// One vector element for a dark module, mirroring the raster shapes.
fn module_element(row: usize, col: usize, style: &StyleConfig, color: Rgba) -> String {
    let (x0, y0) = module_origin(row, col, style.size, style.border);
    let s = style.size as f32;
    let fill = fill_attrs(color);

    // Small boxes degrade to squares, matching the rasterizer
    let shape = if style.size < 3 {
        ModuleShape::Square
    } else {
        style.module_shape
    };

    match shape {
        ModuleShape::Square => {
            format!("<rect x=\"{x0}\" y=\"{y0}\" width=\"{s}\" height=\"{s}\" {fill}/>")
        }
        ModuleShape::Gapped => {
            let m = s * 0.1;
            format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {fill}/>",
                x0 as f32 + m,
                y0 as f32 + m,
                s - 2.0 * m,
                s - 2.0 * m
            )
        }
        ModuleShape::Circle => {
            let r = s * 0.5;
            format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{r}\" {fill}/>",
                x0 as f32 + r,
                y0 as f32 + r
            )
        }
        ModuleShape::Rounded => {
            format!(
                "<rect x=\"{x0}\" y=\"{y0}\" width=\"{s}\" height=\"{s}\" rx=\"{}\" {fill}/>",
                s * 0.3
            )
        }
        ModuleShape::VerticalBars => {
            let w = s * 0.7;
            format!(
                "<rect x=\"{}\" y=\"{y0}\" width=\"{w}\" height=\"{s}\" {fill}/>",
                x0 as f32 + (s - w) * 0.5
            )
        }
        ModuleShape::HorizontalBars => {
            let h = s * 0.7;
            format!(
                "<rect x=\"{x0}\" y=\"{}\" width=\"{s}\" height=\"{h}\" {fill}/>",
                y0 as f32 + (s - h) * 0.5
            )
        }
    }
}
