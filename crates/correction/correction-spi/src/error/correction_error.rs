//! Correction error types.

use thiserror::Error;

/// Errors raised while building or loading correction configuration.
///
/// The filters and the anomaly corrector themselves are total; only
/// settings validation, anomaly table loading and input parsing fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CorrectionError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Invalid anomaly for '{package_name}': {reason}")]
    InvalidAnomaly { package_name: String, reason: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for correction configuration operations.
pub type Result<T> = std::result::Result<T, CorrectionError>;
