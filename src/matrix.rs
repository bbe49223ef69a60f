//! Module matrix: the dark/light grid consumed by the renderer.
//!
//! Matrix generation (data encoding, error correction, layout) is delegated
//! to the `qrcode` crate. This module adapts its output into a validated
//! square grid and never inspects encoding internals.

use crate::error::EstiloError;
use crate::style::ErrorCorrection;

/// A square grid of dark/light modules, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    modules: Vec<bool>,
}

impl Matrix {
    /// Build a matrix from row-major module data.
    ///
    /// Fails with [`EstiloError::InvalidMatrix`] when the dimension is zero
    /// or the data is not `size * size` modules.
    pub fn new(size: usize, modules: Vec<bool>) -> Result<Self, EstiloError> {
        if size == 0 {
            return Err(EstiloError::InvalidMatrix(
                "matrix dimension must be positive".to_string(),
            ));
        }
        if modules.len() != size * size {
            return Err(EstiloError::InvalidMatrix(format!(
                "expected {} modules for a {size}x{size} matrix, got {}",
                size * size,
                modules.len()
            )));
        }
        Ok(Self { size, modules })
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at (row, col) is dark. Coordinates must be in range.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.modules[row * self.size + col]
    }
}

/// Encode data into a module matrix at the given error correction level.
///
/// The smallest QR version that fits the payload is chosen automatically;
/// payloads too large for any version fail with [`EstiloError::Encode`].
pub fn encode(data: &str, level: ErrorCorrection) -> Result<Matrix, EstiloError> {
    let code = qrcode::QrCode::with_error_correction_level(data, level.to_ec_level())
        .map_err(|e| EstiloError::Encode(e.to_string()))?;

    let size = code.width();
    let mut modules = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            modules.push(code[(col, row)] == qrcode::Color::Dark);
        }
    }

    Matrix::new(size, modules)
}
