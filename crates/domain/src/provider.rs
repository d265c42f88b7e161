//! Login providers and their redirect payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identity providers the backend can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginProvider {
    /// Hosted OAuth-style login (also fronts Google for most users).
    Auth0,
    /// Direct Google sign-in.
    Google,
    /// WeChat QR-code sign-in, recommended for mainland China.
    #[serde(rename = "wechat")]
    WeChat,
}

impl LoginProvider {
    /// Path segment used by the backend routes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth0 => "auth0",
            Self::Google => "google",
            Self::WeChat => "wechat",
        }
    }

    /// Path of the endpoint returning this provider's login URL.
    #[must_use]
    pub fn login_path(self) -> String {
        format!("/api/auth/{}/login", self.as_str())
    }

    /// Path under which login attempts report progress.
    ///
    /// The attempt's `state` is appended as one more path segment.
    ///
    /// # Errors
    ///
    /// Google sign-in completes by redirect alone and has no status route.
    pub fn status_path(self) -> Result<String, DomainError> {
        match self {
            Self::Auth0 | Self::WeChat => Ok(format!("/api/auth/{}/status", self.as_str())),
            Self::Google => Err(DomainError::NoStatusEndpoint(self.as_str().to_string())),
        }
    }
}

impl fmt::Display for LoginProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoginProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auth0" => Ok(Self::Auth0),
            "google" => Ok(Self::Google),
            "wechat" => Ok(Self::WeChat),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}

/// Body returned by `GET /api/auth/<provider>/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRedirect {
    /// Third-party page the user agent should be sent to.
    pub auth_url: String,
    /// Opaque state for polling the status endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// QR code content (WeChat only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}
