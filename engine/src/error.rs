//! Error types for the shelf engine.

use crate::RecordId;
use thiserror::Error;

/// Coarse classification of an [`Error`].
///
/// Adapters map kinds, not variants, onto their own status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No record with the requested id exists
    NotFound,
    /// Malformed or missing fields, or an unparseable filter bound
    InvalidInput,
    /// The store itself is unusable
    Internal,
}

/// All possible errors from the shelf engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    // Validation errors
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("type mismatch for field '{field}': expected {expected}, got {got}")]
    TypeMismatch {
        field: String,
        expected: String,
        got: String,
    },

    #[error("invalid value for filter '{param}': {value:?}")]
    InvalidFilter { param: String, value: String },

    // State errors
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RecordNotFound(_) => ErrorKind::NotFound,
            Error::InvalidPayload(_)
            | Error::MissingRequiredField(_)
            | Error::UnknownField(_)
            | Error::TypeMismatch { .. }
            | Error::InvalidFilter { .. } => ErrorKind::InvalidInput,
            Error::LockPoisoned(_) => ErrorKind::Internal,
        }
    }

    /// Shorthand for `kind() == ErrorKind::NotFound`.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::RecordNotFound(7);
        assert_eq!(err.to_string(), "record not found: 7");

        let err = Error::TypeMismatch {
            field: "price".into(),
            expected: "number".into(),
            got: "string".into(),
        };
        assert_eq!(
            err.to_string(),
            "type mismatch for field 'price': expected number, got string"
        );

        let err = Error::InvalidFilter {
            param: "min_price".into(),
            value: "cheap".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for filter 'min_price': \"cheap\""
        );
    }

    #[test]
    fn error_kinds() {
        assert_eq!(Error::RecordNotFound(1).kind(), ErrorKind::NotFound);
        assert!(Error::RecordNotFound(1).is_not_found());
        assert_eq!(
            Error::MissingRequiredField("name".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            Error::UnknownField("colour".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(Error::LockPoisoned("write").kind(), ErrorKind::Internal);
        assert!(!Error::InvalidPayload("x".into()).is_not_found());
    }
}
