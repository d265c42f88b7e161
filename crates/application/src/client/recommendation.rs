//! Smart-login recommendation.

use gatekeeper_domain::request::Headers;
use gatekeeper_domain::{DomainError, HostId, IpLookupResponse, SmartLoginRecommendation};
use url::Url;

use super::AuthClient;
use crate::error::{AuthClientError, AuthResult};

const SMART_LOGIN_PATH: &str = "/api/auth/smart/login";

impl AuthClient {
    /// Resolves the caller's public IP address.
    ///
    /// Never fails: any lookup problem yields the configured fallback.
    pub async fn client_ip(&self) -> String {
        match self.lookup_ip().await {
            Ok(ip) => ip,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback = %self.config.fallback_ip,
                    "IP lookup failed, using fallback"
                );
                self.config.fallback_ip.clone()
            }
        }
    }

    /// Synthetic identifier for this client, derived from the clock.
    #[must_use]
    pub fn host_id(&self) -> HostId {
        HostId::from_timestamp(self.clock.now())
    }

    /// Asks the backend which login provider to present.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or an
    /// undecodable body. IP lookup failures are not errors.
    pub async fn smart_login(&self) -> AuthResult<SmartLoginRecommendation> {
        let client_ip = self.client_ip().await;
        let host_id = self.host_id();

        let mut url = self.config.resolve(SMART_LOGIN_PATH)?;
        url.query_pairs_mut()
            .append_pair("client_ip", &client_ip)
            .append_pair("host_id", host_id.as_str());

        let recommendation: SmartLoginRecommendation = self
            .get_json(&url, Headers::new())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "smart login recommendation failed"))?;

        tracing::info!(
            recommended = %recommendation.recommended_method,
            %client_ip,
            %host_id,
            "received login recommendation"
        );
        Ok(recommendation)
    }

    /// Starts a login with the provider `recommendation` names.
    ///
    /// A login URL the backend already generated for that provider is used
    /// directly; otherwise this falls back to [`Self::login`]. Returns the
    /// URL navigated to.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownProvider`] if the recommended method is
    /// not a known provider, or any error from [`Self::login`].
    pub async fn follow_recommendation(
        &self,
        recommendation: &SmartLoginRecommendation,
    ) -> AuthResult<Url> {
        let provider = recommendation.recommended_provider().ok_or_else(|| {
            DomainError::UnknownProvider(recommendation.recommended_method.clone())
        })?;

        if let Some(prepared) = recommendation.login_url_for(provider) {
            let target = self
                .config
                .resolve(prepared)
                .map_err(|e| AuthClientError::MalformedResponse(format!("login url: {e}")))?;
            tracing::info!(%provider, target = %target, "following recommended login URL");
            self.navigator.navigate(&target);
            return Ok(target);
        }

        let redirect = self.login(provider).await?;
        Ok(self.config.resolve(&redirect.auth_url)?)
    }

    async fn lookup_ip(&self) -> AuthResult<String> {
        let body: IpLookupResponse = self
            .get_json(&self.config.ip_lookup_url, Headers::new())
            .await?;
        let ip = body.ip.trim();
        if ip.is_empty() {
            return Err(AuthClientError::MalformedResponse("empty ip".to_string()));
        }
        Ok(ip.to_string())
    }
}
