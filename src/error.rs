//! Error types for neocat
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using NeoError
pub type Result<T> = std::result::Result<T, NeoError>;

/// Unified error type for neocat operations
#[derive(Debug, Error)]
pub enum NeoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Routing Errors
    // -------------------------------------------------------------------------
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("no CSV file owns the date '{0}'")]
    NoRangeForDate(String),

    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("index {index} out of range (catalog holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}
