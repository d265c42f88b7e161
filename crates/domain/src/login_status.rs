//! Progress of a provider login attempt.

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// Phase reported by `/api/auth/<provider>/status/<state>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginPhase {
    /// The user has not finished at the provider yet.
    Pending,
    /// The provider confirmed the login.
    Success,
    /// The attempt failed or expired.
    Failed,
}

impl LoginPhase {
    /// Returns the wire name of the phase.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for LoginPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the login status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginStatus {
    /// Current phase.
    pub status: LoginPhase,
    /// Backend message.
    #[serde(default)]
    pub message: String,
    /// Signed-in user, once `status` is `success`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl LoginStatus {
    /// True once the attempt can no longer change.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.status, LoginPhase::Success | LoginPhase::Failed)
    }
}
