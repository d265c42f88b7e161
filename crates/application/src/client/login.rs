//! Provider login initiation and status polling.

use gatekeeper_domain::request::Headers;
use gatekeeper_domain::{DomainError, LoginProvider, LoginStatus, ProviderRedirect};
use url::Url;

use super::AuthClient;
use crate::error::{AuthClientError, AuthResult};

impl AuthClient {
    /// Asks the backend for `provider`'s login URL and navigates to it.
    ///
    /// Failures are logged and returned; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a body
    /// without a usable `auth_url`.
    pub async fn login(&self, provider: LoginProvider) -> AuthResult<ProviderRedirect> {
        match self.fetch_redirect(provider).await {
            Ok((redirect, target)) => {
                tracing::info!(%provider, target = %target, "redirecting to provider login");
                self.navigator.navigate(&target);
                Ok(redirect)
            }
            Err(e) => {
                tracing::error!(%provider, error = %e, "login initiation failed");
                Err(e)
            }
        }
    }

    /// [`Self::login`] with the hosted OAuth provider.
    ///
    /// # Errors
    ///
    /// See [`Self::login`].
    pub async fn auth0_login(&self) -> AuthResult<ProviderRedirect> {
        self.login(LoginProvider::Auth0).await
    }

    /// [`Self::login`] with direct Google sign-in.
    ///
    /// # Errors
    ///
    /// See [`Self::login`].
    pub async fn google_login(&self) -> AuthResult<ProviderRedirect> {
        self.login(LoginProvider::Google).await
    }

    /// [`Self::login`] with WeChat.
    ///
    /// # Errors
    ///
    /// See [`Self::login`].
    pub async fn wechat_login(&self) -> AuthResult<ProviderRedirect> {
        self.login(LoginProvider::WeChat).await
    }

    /// Reports how far the login attempt identified by `state` has got.
    ///
    /// Only Auth0 and WeChat logins can be polled.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NoStatusEndpoint`] for Google without sending
    /// anything, otherwise an error on network failure, a non-success
    /// status, or an undecodable body.
    pub async fn login_status(
        &self,
        provider: LoginProvider,
        state: &str,
    ) -> AuthResult<LoginStatus> {
        let mut url = self.config.resolve(&provider.status_path()?)?;
        url.path_segments_mut()
            .map_err(|()| DomainError::InvalidUrl("base URL cannot carry a path".to_string()))?
            .push(state);

        self.get_json(&url, Headers::new())
            .await
            .inspect_err(|e| tracing::error!(%provider, error = %e, "login status query failed"))
    }

    async fn fetch_redirect(&self, provider: LoginProvider) -> AuthResult<(ProviderRedirect, Url)> {
        let url = self.config.resolve(&provider.login_path())?;
        let redirect: ProviderRedirect = self.get_json(&url, Headers::new()).await?;

        if redirect.auth_url.trim().is_empty() {
            return Err(AuthClientError::MalformedResponse(
                "auth_url is empty".to_string(),
            ));
        }
        let target = self
            .config
            .resolve(&redirect.auth_url)
            .map_err(|e| AuthClientError::MalformedResponse(format!("auth_url: {e}")))?;

        Ok((redirect, target))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::client::test_support::harness;
    use crate::ports::HttpClientError;
    use crate::testing::MockHttpClient;
    use gatekeeper_domain::LoginPhase;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_each_provider_navigates_to_auth_url() {
        let cases = [
            (LoginProvider::Auth0, "https://tenant.auth0.com/authorize?x=1"),
            (LoginProvider::Google, "https://accounts.google.com/o/oauth2/auth"),
            (LoginProvider::WeChat, "https://open.weixin.qq.com/connect/qrconnect"),
        ];

        for (provider, auth_url) in cases {
            let h = harness(MockHttpClient::new().json(
                &provider.login_path(),
                200,
                json!({ "auth_url": auth_url, "state": "st" }),
            ));

            let redirect = h.client.login(provider).await.unwrap();

            assert_eq!(redirect.state.as_deref(), Some("st"));
            assert_eq!(h.navigator.navigations(), vec![auth_url.to_string()]);
            assert_eq!(
                h.http.calls()[0].url,
                format!("http://localhost:8000{}", provider.login_path())
            );
        }
    }

    #[tokio::test]
    async fn test_named_helpers_hit_their_provider() {
        let h = harness(
            MockHttpClient::new()
                .json("/api/auth/auth0/login", 200, json!({ "auth_url": "https://a.example/" }))
                .json("/api/auth/google/login", 200, json!({ "auth_url": "https://g.example/" }))
                .json("/api/auth/wechat/login", 200, json!({ "auth_url": "https://w.example/" })),
        );

        h.client.auth0_login().await.unwrap();
        h.client.google_login().await.unwrap();
        h.client.wechat_login().await.unwrap();

        assert_eq!(
            h.navigator.navigations(),
            vec![
                "https://a.example/".to_string(),
                "https://g.example/".to_string(),
                "https://w.example/".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_returned_without_navigation() {
        let h = harness(MockHttpClient::new().fail(
            "/api/auth/google/login",
            HttpClientError::ConnectionFailed("reset".to_string()),
        ));

        let err = h.client.google_login().await.unwrap_err();

        assert!(matches!(err, AuthClientError::Http(_)));
        assert!(h.navigator.navigations().is_empty());
        assert_eq!(h.http.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let h = harness(
            MockHttpClient::new()
                .json("/api/auth/auth0/login", 200, json!({ "url": "https://x/" }))
                .json("/api/auth/wechat/login", 200, json!({ "auth_url": "" })),
        );

        assert!(matches!(
            h.client.auth0_login().await,
            Err(AuthClientError::MalformedResponse(_))
        ));
        assert!(matches!(
            h.client.wechat_login().await,
            Err(AuthClientError::MalformedResponse(_))
        ));
        assert!(h.navigator.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let h = harness(MockHttpClient::new().json(
            "/api/auth/auth0/login",
            500,
            json!({ "detail": "Auth0 not configured" }),
        ));

        match h.client.auth0_login().await {
            Err(AuthClientError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("Auth0 not configured"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_google_has_no_status_endpoint() {
        let h = harness(MockHttpClient::new());

        let err = h
            .client
            .login_status(LoginProvider::Google, "st")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthClientError::Domain(DomainError::NoStatusEndpoint(_))
        ));
        assert!(h.http.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_status_encodes_state() {
        let h = harness(MockHttpClient::new().json(
            "/api/auth/wechat/status/a%20b",
            200,
            json!({ "status": "pending", "message": "waiting for scan" }),
        ));

        let status = h.client.login_status(LoginProvider::WeChat, "a b").await.unwrap();

        assert_eq!(status.status, LoginPhase::Pending);
        assert_eq!(
            h.http.calls()[0].url,
            "http://localhost:8000/api/auth/wechat/status/a%20b"
        );
    }
}
