//! Style configuration: the enumerated shape/gradient/level/format sets and
//! the immutable configuration value passed into each render call.
//!
//! All enums parse by name (`by_name` / `FromStr`) and reject unknown members
//! with [`EstiloError::InvalidStyleValue`] before any rendering happens, so
//! the rasterizer and color source never see an out-of-set value.

use std::path::PathBuf;
use std::str::FromStr;

use crate::color::Rgba;
use crate::error::EstiloError;
use crate::render::overlay;

/// Default pixel size of each module.
pub const DEFAULT_SIZE: u32 = 10;
/// Default quiet-zone width in modules.
pub const DEFAULT_BORDER: u32 = 2;
/// Default gradient edge color when none is given (dark navy, from the
/// library's house defaults).
pub const DEFAULT_EDGE_COLOR: Rgba = Rgba::opaque(0, 0, 0x88);

/// Shape drawn for each dark module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleShape {
    Square,
    Gapped,
    Circle,
    Rounded,
    VerticalBars,
    HorizontalBars,
}

impl ModuleShape {
    /// All shape names, in display order.
    pub const NAMES: &'static [&'static str] = &[
        "square",
        "gapped",
        "circle",
        "rounded",
        "vertical_bars",
        "horizontal_bars",
    ];

    /// Get a shape by name. Case insensitive.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "square" => Some(Self::Square),
            "gapped" => Some(Self::Gapped),
            "circle" => Some(Self::Circle),
            "rounded" => Some(Self::Rounded),
            "vertical_bars" => Some(Self::VerticalBars),
            "horizontal_bars" => Some(Self::HorizontalBars),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Gapped => "gapped",
            Self::Circle => "circle",
            Self::Rounded => "rounded",
            Self::VerticalBars => "vertical_bars",
            Self::HorizontalBars => "horizontal_bars",
        }
    }
}

impl FromStr for ModuleShape {
    type Err = EstiloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s).ok_or_else(|| EstiloError::InvalidStyleValue {
            field: "module_shape",
            value: s.to_string(),
            expected: Self::NAMES.join(", "),
        })
    }
}

/// Spatial function mapping a module coordinate to a color blend factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientStyle {
    Solid,
    Radial,
    Square,
    Horizontal,
    Vertical,
}

impl GradientStyle {
    /// All gradient names, in display order.
    pub const NAMES: &'static [&'static str] =
        &["solid", "radial", "square", "horizontal", "vertical"];

    /// Get a gradient style by name. Case insensitive.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "radial" => Some(Self::Radial),
            "square" => Some(Self::Square),
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Radial => "radial",
            Self::Square => "square",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl FromStr for GradientStyle {
    type Err = EstiloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s).ok_or_else(|| EstiloError::InvalidStyleValue {
            field: "gradient_style",
            value: s.to_string(),
            expected: Self::NAMES.join(", "),
        })
    }
}

/// QR error correction level: how much of the symbol may be obscured while
/// remaining decodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub const NAMES: &'static [&'static str] = &["L", "M", "Q", "H"];

    /// Get a level by name. Case insensitive.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "L" => Some(Self::L),
            "M" => Some(Self::M),
            "Q" => Some(Self::Q),
            "H" => Some(Self::H),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }

    /// Human description of the recovery budget, for catalog listings.
    pub fn recovery(self) -> &'static str {
        match self {
            Self::L => "~7% recovery, smallest symbol",
            Self::M => "~15% recovery, balanced",
            Self::Q => "~25% recovery, good for styling",
            Self::H => "~30% recovery, best for logos",
        }
    }

    /// The external encoder's equivalent level.
    pub fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            Self::L => qrcode::EcLevel::L,
            Self::M => qrcode::EcLevel::M,
            Self::Q => qrcode::EcLevel::Q,
            Self::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = EstiloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s).ok_or_else(|| EstiloError::InvalidStyleValue {
            field: "error_correction",
            value: s.to_string(),
            expected: Self::NAMES.join(", "),
        })
    }
}

/// Serialized output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["png", "svg"];

    /// Get a format by name. Case insensitive.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = EstiloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s).ok_or_else(|| EstiloError::InvalidStyleValue {
            field: "output_format",
            value: s.to_string(),
            expected: Self::NAMES.join(", "),
        })
    }
}

/// Center-embedded logo settings.
#[derive(Debug, Clone)]
pub struct LogoOptions {
    /// Path to the logo image file.
    pub path: PathBuf,
    /// Fraction of the image width the logo may cover. Values outside
    /// [0.1, 0.4] are clamped at overlay time.
    pub size_ratio: f32,
}

impl LogoOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size_ratio: 0.3,
        }
    }
}

/// Immutable style configuration for one render call.
///
/// ## Example
///
/// ```
/// use estilo::style::{ModuleShape, GradientStyle, StyleConfig};
/// use estilo::color::Rgba;
///
/// let style = StyleConfig::default()
///     .shape(ModuleShape::Circle)
///     .gradient(
///         GradientStyle::Radial,
///         Rgba::opaque(255, 0, 0),
///         Rgba::opaque(0, 0, 255),
///     );
/// ```
#[derive(Debug, Clone)]
pub struct StyleConfig {
    pub module_shape: ModuleShape,
    pub gradient_style: GradientStyle,
    pub fg_color: Rgba,
    pub bg_color: Rgba,
    pub gradient_center_color: Rgba,
    pub gradient_edge_color: Rgba,
    /// Pixel size of each module. Must be at least 1.
    pub size: u32,
    /// Quiet-zone width in modules.
    pub border: u32,
    pub error_correction: ErrorCorrection,
    pub output_format: OutputFormat,
    /// Render the background as fully transparent (PNG only).
    pub transparent: bool,
    pub logo: Option<LogoOptions>,
    /// Image whose pixels color the modules (image-fill mode).
    pub background_image: Option<PathBuf>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            module_shape: ModuleShape::Square,
            gradient_style: GradientStyle::Solid,
            fg_color: Rgba::BLACK,
            bg_color: Rgba::WHITE,
            gradient_center_color: Rgba::BLACK,
            gradient_edge_color: DEFAULT_EDGE_COLOR,
            size: DEFAULT_SIZE,
            border: DEFAULT_BORDER,
            error_correction: ErrorCorrection::H,
            output_format: OutputFormat::Png,
            transparent: false,
            logo: None,
            background_image: None,
        }
    }
}

impl StyleConfig {
    /// Set the module shape.
    pub fn shape(mut self, shape: ModuleShape) -> Self {
        self.module_shape = shape;
        self
    }

    /// Set foreground and background colors.
    pub fn colors(mut self, fg: Rgba, bg: Rgba) -> Self {
        self.fg_color = fg;
        self.bg_color = bg;
        self
    }

    /// Set a gradient fill with its center/start and edge/end colors.
    pub fn gradient(mut self, gradient: GradientStyle, center: Rgba, edge: Rgba) -> Self {
        self.gradient_style = gradient;
        self.gradient_center_color = center;
        self.gradient_edge_color = edge;
        self
    }

    /// Set the pixel size per module.
    pub fn module_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the quiet-zone width in modules.
    pub fn quiet_zone(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Embed a logo in the center of the code.
    pub fn with_logo(mut self, logo: LogoOptions) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Color the modules from an image file.
    pub fn with_background_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.background_image = Some(path.into());
        self
    }

    /// The error correction level that will actually be used.
    ///
    /// A logo occludes a central block of modules, so logo renders always run
    /// at level H regardless of the requested level.
    pub fn effective_error_correction(&self) -> ErrorCorrection {
        if self.logo.is_some() {
            ErrorCorrection::H
        } else {
            self.error_correction
        }
    }

    /// The output format that will actually be used.
    ///
    /// Transparency, logo overlay, and image fills need per-pixel raster
    /// output, so those renders always serialize as PNG.
    pub fn effective_format(&self) -> OutputFormat {
        if self.transparent || self.logo.is_some() || self.background_image.is_some() {
            OutputFormat::Png
        } else {
            self.output_format
        }
    }

    /// Fail-fast validation, run before any pixel is touched.
    pub fn validate(&self) -> Result<(), EstiloError> {
        if self.size < 1 {
            return Err(EstiloError::InvalidStyleValue {
                field: "size",
                value: self.size.to_string(),
                expected: "an integer >= 1".to_string(),
            });
        }
        if let Some(logo) = &self.logo {
            if !logo.size_ratio.is_finite() || logo.size_ratio <= 0.0 {
                return Err(EstiloError::InvalidStyleValue {
                    field: "logo.size_ratio",
                    value: logo.size_ratio.to_string(),
                    expected: format!(
                        "a ratio in [{}, {}]",
                        overlay::MIN_LOGO_RATIO,
                        overlay::MAX_LOGO_RATIO
                    ),
                });
            }
        }
        Ok(())
    }
}
