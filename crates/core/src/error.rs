//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, existence). Every variant leaves the store untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was missing or could not be interpreted (caller misuse).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A product field failed validation. `field` is the snake_case field name.
    #[error("validation failed: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A create targeted an id that is already stored.
    #[error("product with id {0} already exists")]
    Duplicate(ProductId),

    /// An update/delete targeted an id that is not stored.
    #[error("product with id {0} was not found")]
    NotFound(ProductId),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: msg.into(),
        }
    }

    pub fn duplicate(id: ProductId) -> Self {
        Self::Duplicate(id)
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    /// The offending product id, for duplicate/not-found failures.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Self::Duplicate(id) | Self::NotFound(id) => Some(*id),
            _ => None,
        }
    }
}
