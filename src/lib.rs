//! # Estilo - Styled QR Code Rendering
//!
//! Estilo renders QR module matrices as styled raster or vector images while
//! keeping the result decodable by standard readers. It provides:
//!
//! - **Module shapes**: square, gapped, circle, rounded, vertical/horizontal bars
//! - **Color fills**: solid colors plus radial, square, horizontal, and
//!   vertical gradients
//! - **Logo overlay**: center-embedded logo with automatic level-H error
//!   correction
//! - **Image fills**: module colors sampled from a background image, with a
//!   contrast fallback for near-white regions
//! - **Output**: PNG (with per-pixel alpha) and SVG
//!
//! Matrix generation itself is delegated to the `qrcode` crate; estilo only
//! consumes the finished dark/light grid.
//!
//! ## Quick Start
//!
//! ```
//! use estilo::{matrix, render, style::StyleConfig};
//!
//! let style = StyleConfig::default();
//! let matrix = matrix::encode("https://example.com", style.effective_error_correction())?;
//! let image = render::render(&matrix, &style)?;
//! let png = render::encode_png(&image)?;
//! # Ok::<(), estilo::EstiloError>(())
//! ```
//!
//! Or use the full pipeline in one call:
//!
//! ```
//! use estilo::style::{ModuleShape, StyleConfig};
//!
//! let style = StyleConfig::default().shape(ModuleShape::Circle);
//! let output = estilo::generate("https://example.com", &style)?;
//! # Ok::<(), estilo::EstiloError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`matrix`] | Module matrix type and encoder adapter |
//! | [`style`] | Style configuration and enumerated option sets |
//! | [`color`] | Hex color parsing and interpolation |
//! | [`shape`] | Per-pixel module shape rasterization |
//! | [`gradient`] | Solid/gradient/image color sources |
//! | [`render`] | Raster compositor, SVG compositor, logo overlay |
//! | [`catalog`] | Read-only listing of supported styles and defaults |
//! | [`error`] | Error types |

pub mod catalog;
pub mod color;
pub mod error;
pub mod gradient;
pub mod matrix;
pub mod render;
pub mod shape;
pub mod style;

// Re-exports for convenience
pub use color::Rgba;
pub use error::EstiloError;
pub use matrix::Matrix;
pub use style::StyleConfig;

use style::OutputFormat;

/// Final serialized output of a [`generate`] call.
#[derive(Debug, Clone)]
pub enum Output {
    Png(Vec<u8>),
    Svg(String),
}

impl Output {
    /// The serialized bytes, whatever the format.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Output::Png(bytes) => bytes,
            Output::Svg(markup) => markup.as_bytes(),
        }
    }

    /// Conventional file extension for this output.
    pub fn extension(&self) -> &'static str {
        match self {
            Output::Png(_) => "png",
            Output::Svg(_) => "svg",
        }
    }
}

/// Encode `data` and render it under `style`: the full pipeline from text to
/// serialized bytes.
///
/// Validation runs before the encoder is touched. A requested logo forces
/// error correction to H, and transparent/logo/image-fill renders always
/// serialize as PNG (see [`StyleConfig::effective_format`]).
pub fn generate(data: &str, style: &StyleConfig) -> Result<Output, EstiloError> {
    style.validate()?;
    let matrix = matrix::encode(data, style.effective_error_correction())?;

    match style.effective_format() {
        OutputFormat::Svg => Ok(Output::Svg(render::svg::render_svg(&matrix, style)?)),
        OutputFormat::Png => {
            let mut image = render::render(&matrix, style)?;
            if let Some(logo) = &style.logo {
                let pad_color = if style.transparent {
                    Rgba::WHITE
                } else {
                    style.bg_color
                };
                render::overlay::overlay_logo(&mut image, &logo.path, logo.size_ratio, pad_color)?;
            }
            Ok(Output::Png(render::encode_png(&image)?))
        }
    }
}
