//! Color handling: hex parsing and per-channel linear interpolation.
//!
//! Colors always enter the system as hex strings. Accepted forms are exactly
//! 6 (`RRGGBB`) or 8 (`RRGGBBAA`) hex digits, case-insensitive, with an
//! optional leading `#`. Anything else fails with
//! [`EstiloError::InvalidColor`] before any rendering starts.

use serde::Serialize;

use crate::error::EstiloError;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string like `#FF0000` or `FF0000CC`.
    pub fn from_hex(input: &str) -> Result<Self, EstiloError> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EstiloError::InvalidColor(input.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| EstiloError::InvalidColor(input.to_string()))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if hex.len() == 8 { channel(6)? } else { 255 },
        })
    }

    /// CSS hex form (`#rrggbb`), used for SVG fill attributes.
    /// Alpha is carried separately as `fill-opacity`.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

/// Linear blend between two colors.
///
/// Returns `a` when `t=0`, `b` when `t=1`. Each channel is interpolated
/// independently and rounded; `t` is clamped to [0, 1].
pub fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Rgba::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), mix(a.a, b.a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(Rgba::from_hex("#FF0000").unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!(Rgba::from_hex("00ff88").unwrap(), Rgba::opaque(0, 255, 136));
    }

    #[test]
    fn test_parse_rgba() {
        let c = Rgba::from_hex("#FF0000CC").unwrap();
        assert_eq!(c, Rgba::new(255, 0, 0, 0xCC));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            Rgba::from_hex("#aAbBcC").unwrap(),
            Rgba::opaque(0xAA, 0xBB, 0xCC)
        );
    }

    #[test]
    fn test_parse_rejects_bad_lengths() {
        // 3-digit shorthand is not part of the accepted grammar
        assert!(Rgba::from_hex("#F00").is_err());
        assert!(Rgba::from_hex("").is_err());
        assert!(Rgba::from_hex("#FF00001").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let err = Rgba::from_hex("#GG0000").unwrap_err();
        assert!(matches!(err, EstiloError::InvalidColor(_)));
    }

    #[test]
    fn test_lerp_endpoints() {
        let red = Rgba::opaque(255, 0, 0);
        let blue = Rgba::opaque(0, 0, 255);
        assert_eq!(lerp(red, blue, 0.0), red);
        assert_eq!(lerp(red, blue, 1.0), blue);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = lerp(Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255), 0.5);
        assert_eq!(mid, Rgba::opaque(128, 128, 128));
    }

    #[test]
    fn test_lerp_clamps_factor() {
        let red = Rgba::opaque(255, 0, 0);
        let blue = Rgba::opaque(0, 0, 255);
        assert_eq!(lerp(red, blue, -1.0), red);
        assert_eq!(lerp(red, blue, 2.0), blue);
    }

    #[test]
    fn test_css() {
        assert_eq!(Rgba::opaque(255, 0, 170).css(), "#ff00aa");
    }
}
