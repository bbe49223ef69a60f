//! Style catalog: the enumerated style sets and current defaults.
//!
//! Pure read-only metadata with no side effects, consumed by the CLI
//! `styles` listing and serializable for machine consumers.

use serde::Serialize;

use crate::style::{
    DEFAULT_BORDER, DEFAULT_SIZE, ErrorCorrection, GradientStyle, ModuleShape, OutputFormat,
};

/// One error correction level with its recovery description.
#[derive(Debug, Clone, Serialize)]
pub struct EcLevelInfo {
    pub level: &'static str,
    pub recovery: &'static str,
}

/// Default settings applied when a field is not specified.
#[derive(Debug, Clone, Serialize)]
pub struct Defaults {
    pub size: u32,
    pub border: u32,
    pub format: &'static str,
    pub error_correction: &'static str,
}

/// Snapshot of everything the renderer supports.
#[derive(Debug, Clone, Serialize)]
pub struct StyleCatalog {
    pub module_shapes: &'static [&'static str],
    pub gradient_styles: &'static [&'static str],
    pub error_correction_levels: Vec<EcLevelInfo>,
    pub output_formats: &'static [&'static str],
    pub defaults: Defaults,
}

/// Build the current style catalog.
pub fn catalog() -> StyleCatalog {
    StyleCatalog {
        module_shapes: ModuleShape::NAMES,
        gradient_styles: GradientStyle::NAMES,
        error_correction_levels: [
            ErrorCorrection::L,
            ErrorCorrection::M,
            ErrorCorrection::Q,
            ErrorCorrection::H,
        ]
        .into_iter()
        .map(|level| EcLevelInfo {
            level: level.name(),
            recovery: level.recovery(),
        })
        .collect(),
        output_formats: OutputFormat::NAMES,
        defaults: Defaults {
            size: DEFAULT_SIZE,
            border: DEFAULT_BORDER,
            format: OutputFormat::Png.name(),
            error_correction: ErrorCorrection::H.name(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_contents() {
        let cat = catalog();
        assert!(cat.module_shapes.contains(&"circle"));
        assert!(cat.module_shapes.contains(&"vertical_bars"));
        assert_eq!(cat.module_shapes.len(), 6);
        assert_eq!(cat.gradient_styles.len(), 5);
        assert_eq!(cat.error_correction_levels.len(), 4);
        assert_eq!(cat.output_formats, &["png", "svg"]);
    }

    #[test]
    fn test_catalog_defaults() {
        let cat = catalog();
        assert_eq!(cat.defaults.size, 10);
        assert_eq!(cat.defaults.border, 2);
        assert_eq!(cat.defaults.format, "png");
        assert_eq!(cat.defaults.error_correction, "H");
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_string(&catalog()).unwrap();
        assert!(json.contains("\"module_shapes\""));
        assert!(json.contains("rounded"));
    }
}
