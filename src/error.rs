//! Error types for prefixtrail
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using TrailError
pub type Result<T> = std::result::Result<T, TrailError>;

/// Unified error type for prefixtrail operations
#[derive(Debug, Error)]
pub enum TrailError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Filter Format Errors
    // -------------------------------------------------------------------------
    #[error("Filter format error: {0}")]
    Format(String),

    // -------------------------------------------------------------------------
    // Input Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid prefix: {0}")]
    InvalidPrefix(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
