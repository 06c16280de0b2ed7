//! Error types for the Math Editor
//!
//! Empty submissions and malformed LaTeX are not errors: the former are
//! ignored and the latter is absorbed by the renderer. What remains are bad
//! configuration and PDF export failures.

use thiserror::Error;

/// Invalid editor configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Export filename must not be empty")]
    EmptyFilename,

    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },

    #[error("At least one keyboard layout is required")]
    NoLayouts,
}

/// PDF export failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// The off-screen container for a math block could not be created
    #[error("Failed to stage math block {index}: {message}")]
    Staging { index: usize, message: String },

    /// The generator rejected a text block or a staged element
    #[error("Failed to place line {index}: {message}")]
    Placement { index: usize, message: String },

    #[error("Failed to save {filename}: {message}")]
    Save { filename: String, message: String },

    /// The PDF generator itself is unavailable (e.g. jsPDF not loaded)
    #[error("PDF generator unavailable: {0}")]
    Generator(String),
}
