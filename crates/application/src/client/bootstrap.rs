//! Start-up sequence run when a page loads.

use super::AuthClient;
use crate::error::AuthResult;

/// What [`AuthClient::bootstrap`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The location carried login credentials, which are now the session.
    RedirectCompleted,
    /// A stored token was confirmed by the backend.
    SessionValid,
    /// No usable session.
    Anonymous,
}

impl AuthClient {
    /// Completes a pending redirect, or otherwise validates any stored token.
    ///
    /// # Errors
    ///
    /// Returns an error only if redirect credentials cannot be persisted.
    pub async fn bootstrap(&self) -> AuthResult<BootstrapOutcome> {
        if self.complete_redirect()? {
            return Ok(BootstrapOutcome::RedirectCompleted);
        }

        let outcome = if self.validate_token().await {
            BootstrapOutcome::SessionValid
        } else {
            BootstrapOutcome::Anonymous
        };
        tracing::debug!(?outcome, "bootstrap finished");
        Ok(outcome)
    }
}
