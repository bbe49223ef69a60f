//! # Rendering
//!
//! The compositor: walks the module matrix and rasterizes every dark module
//! into an RGBA buffer through the configured shape and color source. The
//! quiet zone stays background-only because modules are drawn offset by the
//! border, never into it.
//!
//! ## Modules
//!
//! - [`svg`]: the same compositing expressed as vector primitives
//! - [`overlay`]: center logo overlay on a finished raster

pub mod overlay;
pub mod svg;

use image::RgbaImage;

use crate::color::Rgba;
use crate::error::EstiloError;
use crate::gradient::{ImageSampler, color_at};
use crate::matrix::Matrix;
use crate::style::StyleConfig;

/// Pixel origin of a module's box.
///
/// The box is `size` by `size` pixels starting at
/// `((col + border) * size, (row + border) * size)`.
#[inline]
pub fn module_origin(row: usize, col: usize, size: u32, border: u32) -> (u32, u32) {
    ((col as u32 + border) * size, (row as u32 + border) * size)
}

/// Side length in pixels of the rendered image: `(n + 2 * border) * size`.
#[inline]
pub fn image_side(n: usize, size: u32, border: u32) -> u32 {
    (n as u32 + 2 * border) * size
}

/// Render a module matrix to an RGBA image under the given style.
///
/// Validation and file decoding happen before the buffer is allocated, so an
/// error never leaves a partial image behind.
pub fn render(matrix: &Matrix, style: &StyleConfig) -> Result<RgbaImage, EstiloError> {
    style.validate()?;

    let sampler = match &style.background_image {
        Some(path) => Some(ImageSampler::open(path, style.fg_color)?),
        None => None,
    };

    let n = matrix.size();
    let side = image_side(n, style.size, style.border);
    let background = if style.transparent {
        Rgba::TRANSPARENT
    } else {
        style.bg_color
    };
    let mut image = RgbaImage::from_pixel(side, side, background.to_pixel());

    for row in 0..n {
        for col in 0..n {
            if !matrix.get(row, col) {
                continue;
            }
            let color = match &sampler {
                Some(sampler) => {
                    let (x0, y0) = module_origin(row, col, style.size, style.border);
                    sampler.sample(x0 + style.size / 2, y0 + style.size / 2, side, side)
                }
                None => color_at(style, row, col, n),
            };
            draw_module(&mut image, row, col, style, color);
        }
    }

    Ok(image)
}

/// Rasterize one dark module into its box.
fn draw_module(image: &mut RgbaImage, row: usize, col: usize, style: &StyleConfig, color: Rgba) {
    let (x0, y0) = module_origin(row, col, style.size, style.border);
    let pixel = color.to_pixel();
    for py in 0..style.size {
        for px in 0..style.size {
            if style.module_shape.covers(px, py, style.size) {
                image.put_pixel(x0 + px, y0 + py, pixel);
            }
        }
    }
}

/// Encode an RGBA image to PNG bytes (per-pixel alpha preserved).
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, EstiloError> {
    use image::ImageEncoder;

    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e: image::ImageError| EstiloError::ImageEncode(e.to_string()))?;

    Ok(png_bytes)
}
