//! Error types for rentaldb
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RentalError
pub type Result<T> = std::result::Result<T, RentalError>;

/// Unified error type for rentaldb operations
#[derive(Debug, Error)]
pub enum RentalError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Data File Errors
    // -------------------------------------------------------------------------
    #[error("data file corruption detected: {0}")]
    CorruptFile(String),

    #[error("record decode failed: {0}")]
    CorruptRecord(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("no active rental with ID {0}")]
    RentalNotFound(String),
}
