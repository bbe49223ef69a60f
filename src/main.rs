//! # Estilo CLI
//!
//! Command-line interface for styled QR code generation.
//!
//! ## Usage
//!
//! ```bash
//! # Basic black-on-white QR code
//! estilo generate "https://example.com" -o qr.png
//!
//! # Circles with a radial red-to-blue gradient
//! estilo generate "https://example.com" --shape circle \
//!     --gradient radial --center-color "#FF0000" --edge-color "#0000FF"
//!
//! # Embedded center logo (error correction is forced to H)
//! estilo generate "https://example.com" --logo logo.png --logo-ratio 0.3
//!
//! # Transparent background PNG
//! estilo generate "https://example.com" --transparent
//!
//! # List available shapes, gradients, and defaults
//! estilo styles
//! estilo styles --json
//! ```

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use estilo::EstiloError;
use estilo::catalog;
use estilo::color::Rgba;
use estilo::style::{ErrorCorrection, GradientStyle, LogoOptions, ModuleShape, OutputFormat, StyleConfig};

/// Estilo - styled QR code generator
#[derive(Parser, Debug)]
#[command(name = "estilo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a styled QR code image
    Generate {
        /// Text or URL to encode
        data: String,

        /// Output file path
        #[arg(short, long, default_value = "qr.png")]
        output: PathBuf,

        /// Module shape
        #[arg(long, default_value = "square")]
        shape: String,

        /// Gradient style
        #[arg(long, default_value = "solid")]
        gradient: String,

        /// Foreground color (hex)
        #[arg(long, default_value = "#000000")]
        fg: String,

        /// Background color (hex)
        #[arg(long, default_value = "#FFFFFF")]
        bg: String,

        /// Gradient center/start color (hex, defaults to the foreground color)
        #[arg(long)]
        center_color: Option<String>,

        /// Gradient edge/end color (hex)
        #[arg(long, default_value = "#000088")]
        edge_color: String,

        /// Pixel size of each module
        #[arg(long, default_value_t = 10)]
        size: u32,

        /// Quiet-zone width in modules
        #[arg(long, default_value_t = 2)]
        border: u32,

        /// Error correction level: L, M, Q, or H
        #[arg(long, default_value = "H")]
        error_correction: String,

        /// Output format: png or svg
        #[arg(long, default_value = "png")]
        format: String,

        /// Render the background fully transparent (PNG only)
        #[arg(long)]
        transparent: bool,

        /// Path to a center logo image
        #[arg(long)]
        logo: Option<PathBuf>,

        /// Fraction of the image width the logo covers (0.1 to 0.4)
        #[arg(long, default_value_t = 0.3)]
        logo_ratio: f32,

        /// Image whose pixels color the modules
        #[arg(long)]
        background_image: Option<PathBuf>,
    },

    /// List available shapes, gradients, levels, and defaults
    Styles {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EstiloError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            data,
            output,
            shape,
            gradient,
            fg,
            bg,
            center_color,
            edge_color,
            size,
            border,
            error_correction,
            format,
            transparent,
            logo,
            logo_ratio,
            background_image,
        } => {
            let fg_color = Rgba::from_hex(&fg)?;
            let center = match &center_color {
                Some(hex) => Rgba::from_hex(hex)?,
                None => fg_color,
            };

            let mut style = StyleConfig::default()
                .shape(shape.parse::<ModuleShape>()?)
                .gradient(
                    gradient.parse::<GradientStyle>()?,
                    center,
                    Rgba::from_hex(&edge_color)?,
                )
                .module_size(size)
                .quiet_zone(border);
            style.fg_color = fg_color;
            style.bg_color = Rgba::from_hex(&bg)?;
            style.error_correction = error_correction.parse::<ErrorCorrection>()?;
            style.output_format = format.parse::<OutputFormat>()?;
            style.transparent = transparent;
            if let Some(path) = logo {
                let mut options = LogoOptions::new(path);
                options.size_ratio = logo_ratio;
                style.logo = Some(options);
            }
            if let Some(path) = background_image {
                style = style.with_background_image(path);
            }

            let result = estilo::generate(&data, &style)?;
            if style.output_format != style.effective_format() {
                println!(
                    "Note: {} output requires PNG, writing {} data",
                    style.output_format.name(),
                    result.extension()
                );
            }
            fs::write(&output, result.bytes())?;
            println!("Saved {} QR code to {}", result.extension(), output.display());
            Ok(())
        }

        Commands::Styles { json } => {
            let cat = catalog::catalog();
            if json {
                let pretty =
                    serde_json::to_string_pretty(&cat).map_err(std::io::Error::other)?;
                println!("{pretty}");
            } else {
                println!("Module shapes:");
                for name in cat.module_shapes {
                    println!("  {}", name);
                }
                println!("\nGradient styles:");
                for name in cat.gradient_styles {
                    println!("  {}", name);
                }
                println!("\nError correction levels:");
                for info in &cat.error_correction_levels {
                    println!("  {} - {}", info.level, info.recovery);
                }
                println!("\nOutput formats:");
                for name in cat.output_formats {
                    println!("  {}", name);
                }
                println!(
                    "\nDefaults: size {}, border {}, format {}, error correction {}",
                    cat.defaults.size,
                    cat.defaults.border,
                    cat.defaults.format,
                    cat.defaults.error_correction
                );
            }
            Ok(())
        }
    }
}
