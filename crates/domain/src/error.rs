//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A session token must contain at least one non-whitespace character.
    #[error("session token must not be empty")]
    EmptyToken,

    /// An email address must be provided before a recovery request.
    #[error("email must not be empty")]
    EmptyEmail,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
