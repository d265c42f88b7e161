//! Query parameters carried by the post-login redirect.
//!
//! After a provider login the backend sends the user agent back with
//! `?token=..&user_id=..&username=..&email=..&login_method=..`.

use url::Url;

use crate::user::UserProfile;

/// Values pulled from a redirect query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedirectParams {
    /// `token`
    pub token: Option<String>,
    /// `user_id`
    pub user_id: Option<String>,
    /// `username`
    pub username: Option<String>,
    /// `email`
    pub email: Option<String>,
    /// `login_method`
    pub login_method: Option<String>,
}

impl RedirectParams {
    /// Parses a query string, with or without the leading `?`.
    ///
    /// Values are percent-decoded. When a key repeats, the first value wins.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "token" => &mut params.token,
                "user_id" => &mut params.user_id,
                "username" => &mut params.username,
                "email" => &mut params.email,
                "login_method" => &mut params.login_method,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }

    /// Parses the query component of a full URL.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        url.query().map(Self::from_query).unwrap_or_default()
    }

    /// Splits the parameters into a token and the profile it belongs to.
    ///
    /// Returns `None` when no non-empty `token` was passed.
    #[must_use]
    pub fn into_credentials(self) -> Option<(String, UserProfile)> {
        let token = self.token.filter(|t| !t.is_empty())?;
        let user = UserProfile::new(self.user_id, self.username, self.email, self.login_method);
        Some((token, user))
    }
}

/// Returns `url` with its query and fragment removed.
#[must_use]
pub fn strip_query(url: &Url) -> Url {
    let mut stripped = url.clone();
    stripped.set_query(None);
    stripped.set_fragment(None);
    stripped
}
