//! The authentication client.
//!
//! [`AuthClient`] is the one object callers hold. It owns the session
//! store and talks to the backend through the injected ports; each group
//! of operations lives in its own submodule.

mod authenticated_request;
mod bootstrap;
mod login;
mod recommendation;
mod redirect;
mod validation;

use std::sync::Arc;

use gatekeeper_domain::request::{Headers, RequestSpec};
use gatekeeper_domain::response::ResponseSpec;
use gatekeeper_domain::{SessionState, UserProfile};
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::SessionStore;
use crate::config::ClientConfig;
use crate::error::{AuthClientError, AuthResult};
use crate::ports::{Clock, HttpClient, KeyValueStorage, Navigator};

pub use bootstrap::BootstrapOutcome;

/// Client for the authentication API.
///
/// # Example
///
/// ```ignore
/// let client = AuthClient::new(config, http, storage, navigator, clock)?;
/// if client.bootstrap().await? == BootstrapOutcome::Anonymous {
///     client.login(LoginProvider::Google).await?;
/// }
/// ```
pub struct AuthClient {
    config: ClientConfig,
    http: Arc<dyn HttpClient>,
    navigator: Arc<dyn Navigator>,
    clock: Arc<dyn Clock>,
    session: SessionStore,
}

impl AuthClient {
    /// Creates a client, loading any persisted session from `storage`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured login page is not a valid URL.
    pub fn new(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
        storage: Arc<dyn KeyValueStorage>,
        navigator: Arc<dyn Navigator>,
        clock: Arc<dyn Clock>,
    ) -> AuthResult<Self> {
        let login_page = config.login_page_url()?;
        let session = SessionStore::load(storage, Arc::clone(&navigator), login_page);

        Ok(Self {
            config,
            http,
            navigator,
            clock,
            session,
        })
    }

    /// The session store.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// True iff a token and a profile are held.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Current state of the session.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// The signed-in user's profile.
    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        self.session.current_user()
    }

    /// The bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Ends the session and opens the login page.
    pub fn logout(&self) {
        self.session.clear();
    }

    async fn send(&self, request: &RequestSpec) -> AuthResult<ResponseSpec> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.http.execute(request).await?;
        tracing::debug!(
            status = %response.status,
            elapsed_ms = response.duration.as_millis(),
            "received response"
        );
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url, headers: Headers) -> AuthResult<T> {
        let mut request = RequestSpec::get(url.as_str());
        request.headers = headers;
        let response = self.send(&request).await?;
        decode_json(&response)
    }
}

fn decode_json<T: DeserializeOwned>(response: &ResponseSpec) -> AuthResult<T> {
    if !response.is_success() {
        return Err(AuthClientError::Status {
            status: response.status.as_u16(),
            body: response.text(),
        });
    }
    response
        .json()
        .map_err(|e| AuthClientError::MalformedResponse(e.to_string()))
}
