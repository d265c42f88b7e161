//! Smart-login recommendation types.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::provider::LoginProvider;

/// Body of the public-IP lookup service (`{"ip": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IpLookupResponse {
    /// Caller's public address.
    pub ip: String,
}

/// Synthetic client identifier sent alongside the IP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostId(String);

impl HostId {
    /// Builds `web-<unix millis>` from the given instant.
    #[must_use]
    pub fn from_timestamp(now: DateTime<Utc>) -> Self {
        Self(format!("web-{}", now.timestamp_millis()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Backend suggestion of which provider to present.
///
/// Every field is defaulted, `null` or mistyped values fall back to the
/// default, and unknown fields land in `extra`, so the payload is never
/// rejected for shape alone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SmartLoginRecommendation {
    /// Provider name the backend recommends (`wechat` or `auth0`).
    #[serde(default, deserialize_with = "lenient_string")]
    pub recommended_method: String,
    /// Geolocation details derived from the client IP.
    #[serde(default, deserialize_with = "object_or_empty")]
    pub location_info: Map<String, Value>,
    /// Ready-made WeChat login URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wechat_login_url: Option<String>,
    /// Ready-made Auth0 login URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth0_login_url: Option<String>,
    /// Human-readable explanation.
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// `null` becomes empty; numbers and booleans keep their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

impl SmartLoginRecommendation {
    /// The recommended provider, if the backend named a known one.
    #[must_use]
    pub fn recommended_provider(&self) -> Option<LoginProvider> {
        self.recommended_method.parse().ok()
    }

    /// Login URL the backend pre-generated for `provider`, if any.
    #[must_use]
    pub fn login_url_for(&self, provider: LoginProvider) -> Option<&str> {
        match provider {
            LoginProvider::Auth0 => self.auth0_login_url.as_deref(),
            LoginProvider::WeChat => self.wechat_login_url.as_deref(),
            LoginProvider::Google => None,
        }
    }

    /// Whether the geolocation placed the caller in mainland China.
    #[must_use]
    pub fn is_china(&self) -> bool {
        self.location_info
            .get("is_china")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
