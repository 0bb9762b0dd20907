//! Error types for ArenaKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for ArenaKV operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("there is already a record with ID {0}")]
    DuplicateKey(i32),

    #[error("there is no record with ID {0}")]
    NotFound(i32),

    /// Arena retrieval called with a length that does not match the handle.
    /// The original design treated this as a silent no-op; here it is an
    /// explicit error so callers cannot read a half-filled buffer.
    #[error("length mismatch: handle holds {expected} bytes, caller asked for {requested}")]
    LengthMismatch { expected: u32, requested: u32 },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Script Errors
    // -------------------------------------------------------------------------
    #[error("script parse error: {0}")]
    Script(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<bincode::Error> for StoreError {
    fn from(err: bincode::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
