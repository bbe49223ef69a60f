//! Color sources: solid fill, the four gradient functions, and image
//! sampling.
//!
//! The color of a module is a pure function of its (row, col) coordinate, the
//! matrix size, and the configured colors, so it can be property-tested
//! without a compositor. Image-fill mode replaces the gradient entirely with
//! a lookup into a decoded background image.

use std::path::Path;

use image::RgbaImage;

use crate::color::{Rgba, lerp};
use crate::error::EstiloError;
use crate::style::{GradientStyle, StyleConfig};

impl GradientStyle {
    /// Interpolation factor at a module coordinate, clamped to [0, 1].
    ///
    /// 0 maps to the center/start color, 1 to the edge/end color. Radial uses
    /// Euclidean distance from the matrix center normalized by the distance
    /// to the farthest corner; square uses Chebyshev distance, producing
    /// concentric square bands.
    pub fn factor(self, row: usize, col: usize, n: usize) -> f32 {
        if n <= 1 {
            return 0.0;
        }
        let span = (n - 1) as f32;
        let center = span * 0.5;
        let dx = col as f32 - center;
        let dy = row as f32 - center;

        let t = match self {
            Self::Solid => 0.0,
            Self::Radial => {
                let outer = (2.0 * center * center).sqrt();
                (dx * dx + dy * dy).sqrt() / outer
            }
            Self::Square => dx.abs().max(dy.abs()) / center,
            Self::Horizontal => col as f32 / span,
            Self::Vertical => row as f32 / span,
        };
        t.clamp(0.0, 1.0)
    }
}

/// Color for a dark module at (row, col) in an n-by-n matrix.
pub fn color_at(style: &StyleConfig, row: usize, col: usize, n: usize) -> Rgba {
    match style.gradient_style {
        GradientStyle::Solid => style.fg_color,
        gradient => lerp(
            style.gradient_center_color,
            style.gradient_edge_color,
            gradient.factor(row, col, n),
        ),
    }
}

/// Channel floor above which a sample counts as near-white.
const WHITE_CUTOFF: u8 = 240;
/// Alpha ceiling below which a sample counts as near-transparent.
const ALPHA_CUTOFF: u8 = 16;

/// Samples module colors from a decoded background image.
///
/// Near-white and near-transparent samples fall back to the configured
/// foreground color: a white-on-white module would be unscannable, so the
/// fallback is required behavior, not polish.
#[derive(Debug)]
pub struct ImageSampler {
    image: RgbaImage,
    fallback: Rgba,
}

impl ImageSampler {
    /// Load and fully decode the image at `path`.
    pub fn open(path: &Path, fallback: Rgba) -> Result<Self, EstiloError> {
        let image = image::open(path)
            .map_err(|e| EstiloError::BackgroundLoad(format!("{}: {}", path.display(), e)))?
            .to_rgba8();
        Ok(Self::from_image(image, fallback))
    }

    pub fn from_image(image: RgbaImage, fallback: Rgba) -> Self {
        Self { image, fallback }
    }

    /// Color for the module whose center lands at output pixel (cx, cy) in an
    /// output image of `out_w` by `out_h` pixels.
    ///
    /// The source image is scaled to the output dimensions and sampled
    /// nearest-neighbor; sampled pixels are returned fully opaque.
    pub fn sample(&self, cx: u32, cy: u32, out_w: u32, out_h: u32) -> Rgba {
        let sx = (cx as u64 * self.image.width() as u64 / out_w.max(1) as u64) as u32;
        let sy = (cy as u64 * self.image.height() as u64 / out_h.max(1) as u64) as u32;
        let sx = sx.min(self.image.width() - 1);
        let sy = sy.min(self.image.height() - 1);

        let p = self.image.get_pixel(sx, sy);
        let near_white = p[0] > WHITE_CUTOFF && p[1] > WHITE_CUTOFF && p[2] > WHITE_CUTOFF;
        if near_white || p[3] < ALPHA_CUTOFF {
            self.fallback
        } else {
            Rgba::opaque(p[0], p[1], p[2])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::GradientStyle;
    use pretty_assertions::assert_eq;

    const N: usize = 21;

    fn gradient_style(gradient: GradientStyle) -> StyleConfig {
        StyleConfig::default().gradient(gradient, Rgba::opaque(255, 0, 0), Rgba::opaque(0, 0, 255))
    }

    #[test]
    fn test_solid_always_fg() {
        let style = StyleConfig::default();
        for (row, col) in [(0, 0), (10, 10), (20, 20)] {
            assert_eq!(color_at(&style, row, col, N), Rgba::BLACK);
        }
    }

    #[test]
    fn test_horizontal_endpoints() {
        assert_eq!(GradientStyle::Horizontal.factor(5, 0, N), 0.0);
        assert_eq!(GradientStyle::Horizontal.factor(5, N - 1, N), 1.0);

        let style = gradient_style(GradientStyle::Horizontal);
        assert_eq!(color_at(&style, 5, 0, N), Rgba::opaque(255, 0, 0));
        assert_eq!(color_at(&style, 5, N - 1, N), Rgba::opaque(0, 0, 255));
    }

    #[test]
    fn test_horizontal_monotonic() {
        let mut last = -1.0f32;
        for col in 0..N {
            let t = GradientStyle::Horizontal.factor(0, col, N);
            assert!(t > last, "factor not increasing at col {col}");
            last = t;
        }
    }

    #[test]
    fn test_vertical_endpoints() {
        assert_eq!(GradientStyle::Vertical.factor(0, 7, N), 0.0);
        assert_eq!(GradientStyle::Vertical.factor(N - 1, 7, N), 1.0);
    }

    #[test]
    fn test_radial_center_and_corner() {
        assert_eq!(GradientStyle::Radial.factor(10, 10, N), 0.0);
        // Farthest corner reaches exactly 1.0
        let corner = GradientStyle::Radial.factor(0, 0, N);
        assert!((corner - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_radial_monotonic_along_axis() {
        let mut last = -1.0f32;
        for col in 10..N {
            let t = GradientStyle::Radial.factor(10, col, N);
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn test_square_gradient_concentric_bands() {
        // All modules on the same Chebyshev ring share a factor
        let ring = GradientStyle::Square.factor(10, 13, N);
        assert_eq!(GradientStyle::Square.factor(13, 10, N), ring);
        assert_eq!(GradientStyle::Square.factor(7, 10, N), ring);
        // Edge midpoint is a full step out
        assert_eq!(GradientStyle::Square.factor(10, 0, N), 1.0);
    }

    #[test]
    fn test_single_module_matrix_uses_center_color() {
        assert_eq!(GradientStyle::Radial.factor(0, 0, 1), 0.0);
        assert_eq!(GradientStyle::Horizontal.factor(0, 0, 1), 0.0);
    }

    #[test]
    fn test_sampler_returns_image_color() {
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([10, 120, 200, 255]));
        let sampler = ImageSampler::from_image(image, Rgba::BLACK);
        assert_eq!(sampler.sample(50, 50, 100, 100), Rgba::opaque(10, 120, 200));
    }

    #[test]
    fn test_sampler_falls_back_on_near_white() {
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([250, 250, 250, 255]));
        let sampler = ImageSampler::from_image(image, Rgba::opaque(0, 0, 0));
        assert_eq!(sampler.sample(50, 50, 100, 100), Rgba::BLACK);
    }

    #[test]
    fn test_sampler_falls_back_on_transparent() {
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([30, 30, 30, 0]));
        let sampler = ImageSampler::from_image(image, Rgba::opaque(255, 0, 0));
        assert_eq!(sampler.sample(0, 0, 100, 100), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn test_sampler_missing_file() {
        let err = ImageSampler::open(Path::new("/no/such/image.png"), Rgba::BLACK).unwrap_err();
        assert!(matches!(err, EstiloError::BackgroundLoad(_)));
    }
}
