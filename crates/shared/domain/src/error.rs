//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of how the registry is embedded.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was missing or blank
    #[error("{0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DomainError::InvalidArgument(msg.into())
    }

    /// Human-readable message carried by the error
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument(msg) => msg.as_str(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
