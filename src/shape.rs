//! Module shape rasterization.
//!
//! Each shape decides, pixel by pixel, which positions inside a module's box
//! belong to the foreground. Pixels are sampled at their centers, so a shape
//! like [`ModuleShape::Circle`] never marks a pixel whose center lies outside
//! the inscribed disk.

use crate::style::ModuleShape;

/// Below this box side, every shape degrades to a plain square: there are too
/// few pixels for insets or fillets to survive rounding.
const MIN_STYLED_BOX: u32 = 3;

/// Inset per side for gapped squares, as a fraction of the box side.
const GAP_INSET: f32 = 0.1;

/// Corner fillet radius for rounded squares, as a fraction of the box side.
const CORNER_RADIUS: f32 = 0.3;

/// Strip width for bar shapes, as a fraction of the box side.
const BAR_WIDTH: f32 = 0.7;

impl ModuleShape {
    /// Whether local pixel (px, py) in a box of side `box_size` is foreground.
    pub fn covers(self, px: u32, py: u32, box_size: u32) -> bool {
        if box_size < MIN_STYLED_BOX {
            return true;
        }

        let s = box_size as f32;
        let x = px as f32 + 0.5;
        let y = py as f32 + 0.5;

        match self {
            Self::Square => true,
            Self::Gapped => {
                let m = s * GAP_INSET;
                x >= m && x <= s - m && y >= m && y <= s - m
            }
            Self::Circle => {
                let r = s * 0.5;
                let dx = x - r;
                let dy = y - r;
                dx * dx + dy * dy <= r * r
            }
            Self::Rounded => rounded_covers(x, y, s),
            Self::VerticalBars => (x - s * 0.5).abs() <= s * BAR_WIDTH * 0.5,
            Self::HorizontalBars => (y - s * 0.5).abs() <= s * BAR_WIDTH * 0.5,
        }
    }
}

/// Square with quarter-circle fillets at the four corners.
fn rounded_covers(x: f32, y: f32, s: f32) -> bool {
    let r = s * CORNER_RADIUS;
    // Fold into the top-left quadrant; only the corner square needs a disk test.
    let mx = x.min(s - x);
    let my = y.min(s - y);
    if mx >= r || my >= r {
        return true;
    }
    let dx = r - mx;
    let dy = r - my;
    dx * dx + dy * dy <= r * r
}
