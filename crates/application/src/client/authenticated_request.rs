//! Requests carrying the session's bearer token.

use gatekeeper_domain::request::{Header, Headers, RequestSpec};
use gatekeeper_domain::response::ResponseSpec;

use super::AuthClient;
use crate::error::{AuthClientError, AuthResult};

impl AuthClient {
    /// Sends `request` with the session's credentials attached.
    ///
    /// `Authorization: Bearer <token>` and `Content-Type: application/json`
    /// are added unless `request` sets them itself. Relative URLs resolve
    /// against the API base URL. The response is returned as-is unless its
    /// status is 401, in which case the session is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`AuthClientError::NotLoggedIn`] without sending anything when
    /// no session is held, [`AuthClientError::SessionExpired`] after a 401,
    /// and transport errors as [`AuthClientError::Http`].
    pub async fn authenticated_request(&self, request: RequestSpec) -> AuthResult<ResponseSpec> {
        let session = self.session.snapshot();
        let Some(token) = session.token().filter(|_| session.is_logged_in()) else {
            return Err(AuthClientError::NotLoggedIn);
        };

        let defaults: Headers = [
            Header::bearer(token),
            Header::new("Content-Type", "application/json"),
        ]
        .into_iter()
        .collect();

        let url = self.config.resolve(&request.url)?;
        let request = RequestSpec {
            url: url.to_string(),
            headers: defaults.merged_with(&request.headers),
            ..request
        };

        let response = self.send(&request).await?;
        if response.status.is_unauthorized() {
            tracing::warn!(url = %request.url, "authenticated request rejected, clearing session");
            self.session.clear();
            return Err(AuthClientError::SessionExpired);
        }

        Ok(response)
    }
}
