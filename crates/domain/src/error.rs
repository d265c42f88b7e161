//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A header line could not be split into name and value.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The login provider name is not one of the known providers.
    #[error("unknown login provider: {0}")]
    UnknownProvider(String),

    /// The provider offers no login status polling.
    #[error("login provider {0} has no status endpoint")]
    NoStatusEndpoint(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
