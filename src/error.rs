//! Typed errors returned by catalog operations.
//!
//! Every variant is local and recoverable: the store is left exactly as it was
//! before the failing call, so callers can retry with corrected input.

use crate::catalog::DraftField;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A required draft field was empty (or only whitespace).
    #[error("validation failed: {field} must not be empty")]
    Validation { field: DraftField },

    /// A category value outside the four categories and the `all` sentinel.
    #[error("unknown category '{0}'")]
    InvalidCategory(String),

    /// A difficulty value outside beginner/intermediate/advanced.
    #[error("unknown difficulty '{0}'")]
    InvalidDifficulty(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
