//! Logo overlay: carve a padded region at the image center and blit a
//! resized logo over the finished base render.
//!
//! The logo file is fully decoded before the base image is touched, so a
//! load failure leaves the caller with a valid base render. Callers force
//! error correction to level H whenever a logo is requested (see
//! [`crate::style::StyleConfig::effective_error_correction`]); the ratio
//! ceiling below keeps the occluded area within what level H can
//! reconstruct.

use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::color::Rgba;
use crate::error::EstiloError;

/// Smallest useful logo ratio.
pub const MIN_LOGO_RATIO: f32 = 0.1;
/// Hard ceiling: beyond this the occluded modules exceed the level-H
/// recovery budget.
pub const MAX_LOGO_RATIO: f32 = 0.4;

/// Padding around the logo, as a fraction of its width. Keeps partially
/// occluded neighbor modules from confusing module alignment.
const LOGO_PADDING: f32 = 0.1;

/// Clamp a requested logo ratio into the supported range.
///
/// Out-of-range requests are clamped rather than rejected, matching the
/// clamped ratio the render reports back to the caller.
pub fn clamp_ratio(ratio: f32) -> f32 {
    ratio.clamp(MIN_LOGO_RATIO, MAX_LOGO_RATIO)
}

/// Load the logo at `path` and composite it over the center of `image`.
///
/// Fails with [`EstiloError::LogoLoad`] before any mutation when the file is
/// missing or undecodable.
pub fn overlay_logo(
    image: &mut RgbaImage,
    path: &Path,
    ratio: f32,
    pad_color: Rgba,
) -> Result<(), EstiloError> {
    let logo = image::open(path)
        .map_err(|e| EstiloError::LogoLoad(format!("{}: {}", path.display(), e)))?
        .to_rgba8();
    apply_logo(image, &logo, ratio, pad_color);
    Ok(())
}

/// Composite an already-decoded logo over the center of `image`.
pub fn apply_logo(image: &mut RgbaImage, logo: &RgbaImage, ratio: f32, pad_color: Rgba) {
    let ratio = clamp_ratio(ratio);
    let max_side = ((image.width() as f32 * ratio) as u32).max(1);

    let (lw, lh) = fit_within(logo.width(), logo.height(), max_side);
    let resized = imageops::resize(logo, lw, lh, FilterType::Lanczos3);

    let pad = (lw as f32 * LOGO_PADDING).round() as u32;
    let cx = image.width() / 2;
    let cy = image.height() / 2;

    let x0 = cx.saturating_sub(lw / 2 + pad);
    let y0 = cy.saturating_sub(lh / 2 + pad);
    let x1 = (cx + lw.div_ceil(2) + pad).min(image.width());
    let y1 = (cy + lh.div_ceil(2) + pad).min(image.height());
    fill_rounded_rect(image, x0, y0, x1, y1, pad as f32, pad_color);

    let lx = cx.saturating_sub(lw / 2);
    let ly = cy.saturating_sub(lh / 2);
    for py in 0..lh {
        for px in 0..lw {
            let x = lx + px;
            let y = ly + py;
            if x < image.width() && y < image.height() {
                let blended = blend_over(*image.get_pixel(x, y), *resized.get_pixel(px, py));
                image.put_pixel(x, y, blended);
            }
        }
    }
}

/// Scale (w, h) down preserving aspect ratio so both fit within `max_side`.
fn fit_within(w: u32, h: u32, max_side: u32) -> (u32, u32) {
    if w <= max_side && h <= max_side {
        return (w.max(1), h.max(1));
    }
    let scale = max_side as f32 / w.max(h) as f32;
    (
        ((w as f32 * scale).round() as u32).max(1),
        ((h as f32 * scale).round() as u32).max(1),
    )
}

/// Fill an axis-aligned rounded rectangle, corners filleted at `radius`.
fn fill_rounded_rect(image: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, radius: f32, color: Rgba) {
    let pixel = color.to_pixel();
    let w = (x1 - x0) as f32;
    let h = (y1 - y0) as f32;
    for y in y0..y1 {
        for x in x0..x1 {
            let fx = (x - x0) as f32 + 0.5;
            let fy = (y - y0) as f32 + 0.5;
            let mx = fx.min(w - fx);
            let my = fy.min(h - fy);
            let inside = if mx >= radius || my >= radius {
                true
            } else {
                let dx = radius - mx;
                let dy = radius - my;
                dx * dx + dy * dy <= radius * radius
            };
            if inside {
                image.put_pixel(x, y, pixel);
            }
        }
    }
}

/// Standard alpha compositing: `src` over `dst`.
fn blend_over(dst: image::Rgba<u8>, src: image::Rgba<u8>) -> image::Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    if sa >= 1.0 {
        return src;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return image::Rgba([0, 0, 0, 0]);
    }
    let channel = |s: u8, d: u8| {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round() as u8
    };
    image::Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamp_ratio() {
        assert_eq!(clamp_ratio(0.3), 0.3);
        assert_eq!(clamp_ratio(0.9), MAX_LOGO_RATIO);
        assert_eq!(clamp_ratio(0.01), MIN_LOGO_RATIO);
    }

    #[test]
    fn test_fit_within_preserves_aspect() {
        assert_eq!(fit_within(100, 50, 40), (40, 20));
        assert_eq!(fit_within(50, 100, 40), (20, 40));
        // Already small enough: untouched
        assert_eq!(fit_within(30, 20, 40), (30, 20));
    }

    #[test]
    fn test_apply_logo_centers_and_pads() {
        let mut base = RgbaImage::from_pixel(200, 200, image::Rgba([0, 0, 0, 255]));
        let logo = RgbaImage::from_pixel(50, 50, image::Rgba([255, 0, 0, 255]));
        apply_logo(&mut base, &logo, 0.3, Rgba::WHITE);

        // Logo pixel at the exact center
        assert_eq!(*base.get_pixel(100, 100), image::Rgba([255, 0, 0, 255]));
        // Padding ring just above the 50px logo (rows 70..75) is the pad color
        assert_eq!(*base.get_pixel(100, 72), image::Rgba([255, 255, 255, 255]));
        // Far corner untouched
        assert_eq!(*base.get_pixel(5, 5), image::Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_oversize_ratio_is_clamped() {
        let mut base = RgbaImage::from_pixel(200, 200, image::Rgba([0, 0, 0, 255]));
        let logo = RgbaImage::from_pixel(400, 400, image::Rgba([255, 0, 0, 255]));
        apply_logo(&mut base, &logo, 5.0, Rgba::WHITE);

        // 0.4 ceiling: logo side is 80 px, padded region at most 96 px wide,
        // so pixels 52 px from center on the x axis stay black
        assert_eq!(*base.get_pixel(100, 100), image::Rgba([255, 0, 0, 255]));
        assert_eq!(*base.get_pixel(100 + 52, 100), image::Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_transparent_logo_blends() {
        let mut base = RgbaImage::from_pixel(200, 200, image::Rgba([0, 0, 255, 255]));
        let logo = RgbaImage::from_pixel(50, 50, image::Rgba([255, 0, 0, 0]));
        apply_logo(&mut base, &logo, 0.3, Rgba::WHITE);

        // Fully transparent logo pixels leave the padding visible
        assert_eq!(*base.get_pixel(100, 100), image::Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_missing_file_leaves_base_untouched() {
        let mut base = RgbaImage::from_pixel(100, 100, image::Rgba([7, 7, 7, 255]));
        let before = base.clone();
        let err = overlay_logo(&mut base, Path::new("/no/such/logo.png"), 0.3, Rgba::WHITE)
            .unwrap_err();
        assert!(matches!(err, EstiloError::LogoLoad(_)));
        assert_eq!(base, before);
    }

    #[test]
    fn test_blend_over_opaque_src_wins() {
        let out = blend_over(image::Rgba([0, 0, 0, 255]), image::Rgba([10, 20, 30, 255]));
        assert_eq!(out, image::Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_blend_over_half_alpha() {
        let out = blend_over(image::Rgba([0, 0, 0, 255]), image::Rgba([255, 255, 255, 128]));
        // ~50% white over black
        assert!(out[0] >= 127 && out[0] <= 129);
        assert_eq!(out[3], 255);
    }
}
