//! Error types for record construction and updates.

use std::fmt::{self, Display};

use registrar_types::{FieldKind, FieldName};
use thiserror::Error;

/// Result type for record construction.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// A required field was absent (or null).
    MissingRequired,
    /// A declared field held a value of the wrong kind.
    TypeMismatch {
        expected: FieldKind,
        actual: FieldKind,
    },
    /// A field outside the shape was supplied to a closed shape.
    UnexpectedField,
}

impl Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::MissingRequired => write!(f, "missing required field"),
            ValidationReason::TypeMismatch { expected, actual } => {
                write!(f, "expected {expected}, got {actual}")
            }
            ValidationReason::UnexpectedField => write!(f, "unexpected field"),
        }
    }
}

/// A record input was rejected by its shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}': {reason}")]
pub struct ValidationError {
    pub field: FieldName,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn missing(field: impl Into<FieldName>) -> Self {
        Self {
            field: field.into(),
            reason: ValidationReason::MissingRequired,
        }
    }

    pub fn type_mismatch(field: impl Into<FieldName>, expected: FieldKind, actual: FieldKind) -> Self {
        Self {
            field: field.into(),
            reason: ValidationReason::TypeMismatch { expected, actual },
        }
    }

    pub fn unexpected(field: impl Into<FieldName>) -> Self {
        Self {
            field: field.into(),
            reason: ValidationReason::UnexpectedField,
        }
    }
}

/// Errors from changing an already constructed record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("field '{field}' is readonly")]
    Readonly { field: FieldName },

    #[error("field '{field}' is declared by the shape and cannot be stored as an extra")]
    DeclaredField { field: FieldName },
}
