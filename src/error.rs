//! # Error Types
//!
//! Custom error types for the RSRP Simulator using `thiserror`.

use thiserror::Error;

/// Main error type for the RSRP Simulator
#[derive(Debug, Error)]
pub enum RsrpSimulatorError {
    /// Run configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Trace import errors, carrying the 1-based source line
    #[error("CSV import error at line {0}: {1}")]
    Import(usize, String),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the RSRP Simulator
pub type Result<T> = std::result::Result<T, RsrpSimulatorError>;
