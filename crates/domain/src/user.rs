//! User profile attached to a session.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Profile of the signed-in user.
///
/// Fields are opaque and only checked for presence. The profile arrives
/// either from redirect query parameters or from the `/api/auth/me` body;
/// fields the backend sends beyond the four known ones are kept in `extra`
/// so a refreshed profile survives a round-trip through storage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user id. Accepts a JSON string or number.
    #[serde(
        default,
        deserialize_with = "id_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Provider used to sign in (`auth0`, `google`, `wechat`).
    #[serde(
        default,
        rename = "loginMethod",
        alias = "login_method",
        skip_serializing_if = "Option::is_none"
    )]
    pub login_method: Option<String>,
    /// Any other fields returned by the backend.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UserProfile {
    /// Creates a profile from the four known fields.
    #[must_use]
    pub fn new(
        id: Option<String>,
        username: Option<String>,
        email: Option<String>,
        login_method: Option<String>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            login_method,
            extra: BTreeMap::new(),
        }
    }

    /// Best human-readable label for the user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .or(self.id.as_deref())
            .unwrap_or("unknown user")
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_stored_shape_uses_login_method_camel_case() {
        let profile = UserProfile::new(
            Some("7".into()),
            Some("bob".into()),
            Some("b@x.com".into()),
            Some("google".into()),
        );

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "7",
                "username": "bob",
                "email": "b@x.com",
                "loginMethod": "google"
            })
        );
    }

    #[test]
    fn test_me_response_with_numeric_id_and_extra_fields() {
        let body = json!({
            "id": 42,
            "username": "alice",
            "email": "a@example.com",
            "role": "premium",
            "is_active": true
        });

        let profile: UserProfile = serde_json::from_value(body).unwrap();

        assert_eq!(profile.id.as_deref(), Some("42"));
        assert_eq!(profile.username.as_deref(), Some("alice"));
        assert_eq!(profile.login_method, None);
        assert_eq!(profile.extra.get("role"), Some(&json!("premium")));

        let stored = serde_json::to_value(&profile).unwrap();
        assert_eq!(stored["is_active"], json!(true));
    }

    #[test]
    fn test_null_fields_and_snake_case_alias() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": null,
            "username": null,
            "login_method": "wechat"
        }))
        .unwrap();

        assert_eq!(profile.id, None);
        assert_eq!(profile.login_method.as_deref(), Some("wechat"));
        assert_eq!(profile.display_name(), "unknown user");
    }
}
