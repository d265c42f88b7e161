//! Token validation against the introspection endpoint.

use gatekeeper_domain::UserProfile;
use gatekeeper_domain::request::{Header, Headers};

use super::AuthClient;
use crate::error::AuthResult;

const ME_PATH: &str = "/api/auth/me";

impl AuthClient {
    /// Checks the held token with the backend.
    ///
    /// Without a token this returns `false` and makes no request. On success
    /// the stored profile is refreshed from the response. Any failure clears
    /// the session and returns `false`.
    pub async fn validate_token(&self) -> bool {
        let Some(token) = self.session.token() else {
            return false;
        };

        match self.fetch_profile(&token).await {
            Ok(user) => {
                if let Err(e) = self.session.update_user(user) {
                    tracing::warn!(error = %e, "token valid but profile could not be stored");
                }
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "token validation failed, clearing session");
                self.session.clear();
                false
            }
        }
    }

    async fn fetch_profile(&self, token: &str) -> AuthResult<UserProfile> {
        let url = self.config.resolve(ME_PATH)?;
        let headers: Headers = std::iter::once(Header::bearer(token)).collect();
        self.get_json(&url, headers).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::test_support::{ORIGIN, harness, harness_at};
    use crate::ports::{HttpClientError, KeyValueStorage};
    use crate::testing::{MemoryStorage, MockHttpClient};
    use gatekeeper_domain::{TOKEN_KEY, USER_KEY};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn logged_in_storage() -> Arc<MemoryStorage> {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "abc123").unwrap();
        storage
            .set(USER_KEY, r#"{"id":"7","username":"bob","loginMethod":"google"}"#)
            .unwrap();
        storage
    }

    #[tokio::test]
    async fn test_no_token_means_no_request() {
        let h = harness(MockHttpClient::new());

        assert!(!h.client.validate_token().await);
        assert!(h.http.calls().is_empty());
        assert!(h.navigator.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_valid_token_refreshes_profile() {
        let h = harness_at(
            MockHttpClient::new().json(
                ME_PATH,
                200,
                json!({ "id": 7, "username": "bobby", "email": "b@x.com", "role": "free" }),
            ),
            ORIGIN,
            logged_in_storage(),
        );

        assert!(h.client.validate_token().await);

        let user = h.client.current_user().unwrap();
        assert_eq!(user.username.as_deref(), Some("bobby"));
        assert_eq!(user.id.as_deref(), Some("7"));
        assert!(h.storage.get(USER_KEY).unwrap().unwrap().contains("bobby"));

        let call = &h.http.calls()[0];
        assert_eq!(call.url, "http://localhost:8000/api/auth/me");
        assert_eq!(call.headers.get("authorization"), Some("Bearer abc123"));
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let h = harness_at(
            MockHttpClient::new().json(ME_PATH, 401, json!({ "detail": "Invalid token" })),
            ORIGIN,
            logged_in_storage(),
        );
        assert!(h.client.is_logged_in());

        assert!(!h.client.validate_token().await);

        assert!(!h.client.is_logged_in());
        assert_eq!(h.storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(h.storage.get(USER_KEY).unwrap(), None);
        assert_eq!(
            h.navigator.navigations(),
            vec!["http://localhost:8000/login".to_string()]
        );
    }

    #[tokio::test]
    async fn test_network_failure_clears_session() {
        let h = harness_at(
            MockHttpClient::new().fail(ME_PATH, HttpClientError::Timeout { timeout_ms: 30_000 }),
            ORIGIN,
            logged_in_storage(),
        );

        assert!(!h.client.validate_token().await);
        assert!(!h.client.is_logged_in());
    }
}
