//! Application error types

use gatekeeper_domain::DomainError;
use thiserror::Error;

use crate::ports::{HttpClientError, StorageError};

/// Errors surfaced by [`crate::AuthClient`].
#[derive(Debug, Error)]
pub enum AuthClientError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Http(#[from] HttpClientError),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Status code returned.
        status: u16,
        /// Response body, lossily decoded.
        body: String,
    },

    /// An authenticated call got a 401; the session has been cleared.
    #[error("session expired, please log in again")]
    SessionExpired,

    /// The body was missing a field or was not the expected JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The operation needs a session and none is held.
    #[error("not logged in")]
    NotLoggedIn,

    /// Persistent storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for client operations.
pub type AuthResult<T> = Result<T, AuthClientError>;
