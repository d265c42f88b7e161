//! Session state held by the client.

use crate::user::UserProfile;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key holding the JSON-serialized [`UserProfile`].
pub const USER_KEY: &str = "user_info";

/// Whether the client currently holds usable credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No token or no profile.
    Anonymous,
    /// Both a non-empty token and a profile are held.
    Authenticated,
}

/// A bearer token and the profile it belongs to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    /// Opaque bearer token.
    pub token: Option<String>,
    /// Profile of the signed-in user.
    pub user: Option<UserProfile>,
}

impl Session {
    /// Creates a session holding both halves.
    #[must_use]
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// Returns an empty session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            token: None,
            user: None,
        }
    }

    /// Returns the token if it is present and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// True iff both a non-empty token and a profile are present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some() && self.user.is_some()
    }

    /// Returns the state-machine view of this session.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_logged_in() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

/// Returns a short, log-safe preview of a token.
#[must_use]
pub fn token_preview(token: &str) -> String {
    if token.len() > 12 {
        let cut = token
            .char_indices()
            .nth(8)
            .map_or(token.len(), |(idx, _)| idx);
        format!("{}...", &token[..cut])
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_logged_in_requires_both_halves() {
        assert!(!Session::anonymous().is_logged_in());

        let token_only = Session {
            token: Some("abc".into()),
            user: None,
        };
        assert!(!token_only.is_logged_in());

        let user_only = Session {
            token: None,
            user: Some(UserProfile::default()),
        };
        assert!(!user_only.is_logged_in());

        let both = Session::new("abc", UserProfile::default());
        assert!(both.is_logged_in());
        assert_eq!(both.state(), SessionState::Authenticated);
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let session = Session::new("", UserProfile::default());
        assert!(!session.is_logged_in());
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_token_preview() {
        assert_eq!(token_preview("abcdefghijklmnop"), "abcdefgh...");
        assert_eq!(token_preview("short"), "***");
    }
}
