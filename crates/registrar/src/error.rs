//! Error types for the Registrar SDK.

use registrar_config::ConfigError;
use registrar_schema::{RecordError, ValidationError};
use registrar_store::StoreError;
use registrar_types::CreditsError;
use thiserror::Error;

/// Result type for Registrar operations.
pub type Result<T> = std::result::Result<T, RegistrarError>;

/// Errors surfaced by [`Registrar`](crate::Registrar).
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// Input did not fit a record shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An update to an existing record was refused.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Branded credits could not be combined.
    #[error(transparent)]
    Credits(#[from] CreditsError),

    /// The row store failed.
    #[error("row store error: {0}")]
    Store(#[from] StoreError),

    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
