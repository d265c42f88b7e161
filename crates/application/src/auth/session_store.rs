//! Session store mirrored to persistent storage.
//!
//! The in-memory copy is the source of truth for reads; every write goes
//! to both the copy and the [`KeyValueStorage`] under [`TOKEN_KEY`] and
//! [`USER_KEY`].

use std::sync::Arc;

use gatekeeper_domain::{Session, SessionState, TOKEN_KEY, USER_KEY, UserProfile, token_preview};
use parking_lot::RwLock;
use url::Url;

use crate::error::AuthResult;
use crate::ports::{KeyValueStorage, Navigator, StorageError};

/// Holds the token and profile and keeps storage in step with them.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    navigator: Arc<dyn Navigator>,
    login_page: Url,
    session: RwLock<Session>,
}

impl SessionStore {
    /// Creates a store, loading any session already persisted in `storage`.
    ///
    /// Unreadable or unparseable entries count as absent.
    pub fn load(
        storage: Arc<dyn KeyValueStorage>,
        navigator: Arc<dyn Navigator>,
        login_page: Url,
    ) -> Self {
        let session = read_persisted(storage.as_ref());
        tracing::debug!(state = ?session.state(), "loaded persisted session");

        Self {
            storage,
            navigator,
            login_page,
            session: RwLock::new(session),
        }
    }

    /// Stores a new token and profile.
    ///
    /// # Errors
    ///
    /// Returns an error if either key cannot be persisted. The in-memory
    /// session is updated regardless.
    pub fn save(&self, token: &str, user: UserProfile) -> AuthResult<()> {
        let user_json = serde_json::to_string(&user)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        *self.session.write() = Session::new(token, user);

        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &user_json)?;
        tracing::info!(token = %token_preview(token), "session saved");
        Ok(())
    }

    /// Replaces the profile, keeping the token.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be persisted.
    pub fn update_user(&self, user: UserProfile) -> AuthResult<()> {
        let user_json = serde_json::to_string(&user)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.session.write().user = Some(user);
        self.storage.set(USER_KEY, &user_json)?;
        Ok(())
    }

    /// Drops the session from memory and storage, then opens the login page.
    ///
    /// Storage failures are logged; the in-memory session is always cleared.
    pub fn clear(&self) {
        *self.session.write() = Session::anonymous();

        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::error!(key, error = %e, "failed to remove session key");
            }
        }

        tracing::info!(login_page = %self.login_page, "session cleared");
        self.navigator.navigate(&self.login_page);
    }

    /// True iff a non-empty token and a profile are held.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_logged_in()
    }

    /// Current state of the session.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.read().state()
    }

    /// The bearer token, if one is held.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.read().token().map(str::to_string)
    }

    /// The signed-in user's profile, if one is held.
    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        self.session.read().user.clone()
    }

    /// A copy of the whole session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }
}

fn read_persisted(storage: &dyn KeyValueStorage) -> Session {
    let token = match storage.get(TOKEN_KEY) {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read stored token");
            None
        }
    };

    let user = match storage.get(USER_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Option<UserProfile>>(&raw) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unparseable stored profile");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read stored profile");
            None
        }
    };

    Session { token, user }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::{MemoryStorage, RecordingNavigator};
    use pretty_assertions::assert_eq;

    fn store_with(storage: Arc<MemoryStorage>) -> (SessionStore, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::at("http://localhost:8000/"));
        let store = SessionStore::load(
            storage,
            navigator.clone(),
            Url::parse("http://localhost:8000/login").unwrap(),
        );
        (store, navigator)
    }

    fn bob() -> UserProfile {
        UserProfile::new(
            Some("7".into()),
            Some("bob".into()),
            Some("b@x.com".into()),
            Some("google".into()),
        )
    }

    #[test]
    fn test_save_then_logged_in() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, _) = store_with(storage.clone());
        assert!(!store.is_logged_in());

        store.save("abc123", bob()).unwrap();

        assert!(store.is_logged_in());
        assert_eq!(store.state(), SessionState::Authenticated);
        assert_eq!(store.token().as_deref(), Some("abc123"));
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("abc123"));
        let stored: UserProfile =
            serde_json::from_str(&storage.get(USER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, bob());
    }

    #[test]
    fn test_clear_removes_everything_and_navigates() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, navigator) = store_with(storage.clone());
        store.save("abc123", bob()).unwrap();

        store.clear();

        assert!(!store.is_logged_in());
        assert_eq!(store.current_user(), None);
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get(USER_KEY).unwrap(), None);
        assert_eq!(
            navigator.navigations(),
            vec!["http://localhost:8000/login".to_string()]
        );
    }

    #[test]
    fn test_load_restores_persisted_session() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage
            .set(USER_KEY, &serde_json::to_string(&bob()).unwrap())
            .unwrap();

        let (store, _) = store_with(storage);

        assert!(store.is_logged_in());
        assert_eq!(store.current_user(), Some(bob()));
    }

    #[test]
    fn test_load_treats_bad_profile_as_absent() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, "{not json").unwrap();

        let (store, _) = store_with(storage);

        assert_eq!(store.token().as_deref(), Some("tok"));
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_stored_null_profile_is_absent() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, "null").unwrap();

        let (store, _) = store_with(storage);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_update_user_keeps_token() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, _) = store_with(storage.clone());
        store.save("abc123", bob()).unwrap();

        let mut refreshed = bob();
        refreshed.username = Some("robert".into());
        store.update_user(refreshed.clone()).unwrap();

        assert_eq!(store.token().as_deref(), Some("abc123"));
        assert_eq!(store.current_user(), Some(refreshed));
        assert!(storage.get(USER_KEY).unwrap().unwrap().contains("robert"));
    }
}
