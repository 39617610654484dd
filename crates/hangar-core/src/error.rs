//! Error types for Hangar core operations.
//!
//! This module defines the error taxonomy for the repository layer.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for Hangar operations.
pub type Result<T> = std::result::Result<T, HangarError>;

/// Core error type for Hangar operations.
#[derive(Debug, Error)]
pub enum HangarError {
    /// Invalid input: blank name, unparseable filter operand, malformed
    /// import document
    #[error("Validation error: {0}")]
    Validation(String),

    /// Case-insensitive name collision on create or rename
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    /// Operation targets an entity that does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (disk or connection issues)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for HangarError {
    fn from(err: rusqlite::Error) -> Self {
        HangarError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for HangarError {
    fn from(err: std::io::Error) -> Self {
        HangarError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for HangarError {
    fn from(err: serde_json::Error) -> Self {
        HangarError::Validation(err.to_string())
    }
}
