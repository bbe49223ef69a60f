//! # Error Types
//!
//! This module defines error types used throughout the estilo library.
//! Every validation failure names the offending field and value so it can be
//! reproduced in a test; no error is silently swallowed.

use thiserror::Error;

/// Main error type for estilo operations
#[derive(Debug, Error)]
pub enum EstiloError {
    /// A style field was set to a value outside its enumerated set
    #[error("invalid {field} '{value}'. Choose from: {expected}")]
    InvalidStyleValue {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// A color string was not 6 or 8 hex digits
    #[error("invalid color '{0}'. Use hex format like #FF0000 or #FF0000CC")]
    InvalidColor(String),

    /// The module matrix was empty or not square
    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),

    /// The logo file was missing, unreadable, or undecodable
    #[error("failed to load logo: {0}")]
    LogoLoad(String),

    /// The background image was missing, unreadable, or undecodable
    #[error("failed to load background image: {0}")]
    BackgroundLoad(String),

    /// The QR encoder rejected the payload
    #[error("QR encoding failed: {0}")]
    Encode(String),

    /// Image serialization error
    #[error("image encoding error: {0}")]
    ImageEncode(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
