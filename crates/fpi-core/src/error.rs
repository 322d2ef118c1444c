//! Core error types.

use thiserror::Error;

/// Errors raised by constraint stores.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage layer error.
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// No constraint has the requested identifier.
    #[error("constraint {0} not found")]
    NotFound(u64),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Stored bytes could not be decoded.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// Whether this error means the identifier did not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
