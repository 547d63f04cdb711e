//! Error types for row stores.

use registrar_types::RowId;
use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while talking to a row store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No row is stored under the id.
    #[error("row {0} not found")]
    RowNotFound(RowId),

    /// The id space is used up.
    #[error("row ids exhausted")]
    IdsExhausted,

    /// The backing store could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Internal error (e.g. poisoned lock).
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
