//! Completing a login from the redirect query string.

use gatekeeper_domain::{RedirectParams, strip_query};

use super::AuthClient;
use crate::error::AuthResult;

impl AuthClient {
    /// Consumes `token`/profile parameters from the current location.
    ///
    /// When a non-empty `token` is present the session is saved and the
    /// visible location is replaced by the same URL without its query.
    /// Returns whether that happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the new session cannot be persisted.
    pub fn complete_redirect(&self) -> AuthResult<bool> {
        let location = self.navigator.current_location();
        let Some((token, user)) = RedirectParams::from_url(&location).into_credentials() else {
            return Ok(false);
        };

        tracing::info!(
            user = %user.display_name(),
            login_method = user.login_method.as_deref().unwrap_or("unknown"),
            "completing login from redirect"
        );
        self.session.save(&token, user)?;
        self.navigator.replace_location(&strip_query(&location));
        Ok(true)
    }
}
