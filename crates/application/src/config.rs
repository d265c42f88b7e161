//! Client configuration

use gatekeeper_domain::DomainError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Settings for [`crate::AuthClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the authentication API; relative paths resolve against it.
    pub base_url: Url,
    /// Public-IP lookup service returning `{"ip": "..."}`.
    pub ip_lookup_url: Url,
    /// Address reported when the IP lookup fails.
    pub fallback_ip: String,
    /// Page opened after the session is cleared.
    pub login_page: String,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for the given API origin, other fields defaulted.
    #[must_use]
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Resolves `path` (absolute URL or path) against [`Self::base_url`].
    ///
    /// # Errors
    ///
    /// Returns an error if the result is not a valid URL.
    pub fn resolve(&self, path: &str) -> Result<Url, DomainError> {
        if let Ok(absolute) = Url::parse(path) {
            return Ok(absolute);
        }
        self.base_url
            .join(path)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {path}")))
    }

    /// Absolute URL of the login page.
    ///
    /// # Errors
    ///
    /// Returns an error if `login_page` does not resolve to a valid URL.
    pub fn login_page_url(&self) -> Result<Url, DomainError> {
        self.resolve(&self.login_page)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: static_url("http://localhost:8000/"),
            ip_lookup_url: static_url("https://api.ipify.org/?format=json"),
            fallback_ip: "8.8.8.8".to_string(),
            login_page: "/login".to_string(),
            user_agent: concat!("gatekeeper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[allow(clippy::expect_used)] // only called with literals above
fn static_url(raw: &'static str) -> Url {
    Url::parse(raw).expect("built-in URL is valid")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.fallback_ip, "8.8.8.8");
        assert_eq!(config.ip_lookup_url.host_str(), Some("api.ipify.org"));
        assert_eq!(config.ip_lookup_url.query(), Some("format=json"));
        assert_eq!(
            config.login_page_url().unwrap().as_str(),
            "http://localhost:8000/login"
        );
    }

    #[test]
    fn test_resolve() {
        let config = ClientConfig::with_base_url(Url::parse("https://img.example.com/app/").unwrap());

        assert_eq!(
            config.resolve("/api/auth/me").unwrap().as_str(),
            "https://img.example.com/api/auth/me"
        );
        assert_eq!(
            config.resolve("https://other.example.com/x").unwrap().as_str(),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"https://auth.example.com/"}"#).unwrap();
        assert_eq!(config.base_url.as_str(), "https://auth.example.com/");
        assert_eq!(config.login_page, "/login");
    }
}
