//! # Session Store
//!
//! Holds the bearer token and user id for the current client.
//!
//! ## Read-Through
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set_auth_data ──► durable storage (token, userId) ──► mirror          │
//! │                                                                         │
//! │  token() / user_id() ──► durable storage   (never the mirror)          │
//! │                                                                         │
//! │  Two handles over the same storage always agree, even when only one    │
//! │  of them performed the login.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Empty stored strings are treated as absent. Storage failures are returned
//! to the caller as [`StoreError`](crate::StoreError).

use std::sync::{Arc, RwLock};

use salesdesk_core::{Session, TOKEN_KEY, USER_ID_KEY};
use tracing::info;

use crate::error::StoreResult;
use crate::kv::KeyValueStore;

/// Auth state holder shared by the API client and the route guard.
///
/// Cloning is cheap and clones share both storage and mirror.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    mirror: Arc<RwLock<Session>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The mirror holds the token; only report whether one is present.
        f.debug_struct("SessionStore")
            .field("has_token", &self.snapshot().is_authenticated())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Wraps a durable store. The mirror starts empty; reads always go to storage.
    pub fn new<S: KeyValueStore + 'static>(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
            mirror: Arc::new(RwLock::new(Session::default())),
        }
    }

    /// Persists the token and user id.
    ///
    /// `None` or an empty string deletes the corresponding key.
    pub fn set_auth_data(&self, token: Option<&str>, user_id: Option<&str>) -> StoreResult<()> {
        let token = non_empty(token);
        let user_id = non_empty(user_id);

        self.write_key(TOKEN_KEY, token)?;
        self.write_key(USER_ID_KEY, user_id)?;

        let mut mirror = self.mirror.write().unwrap_or_else(|p| p.into_inner());
        mirror.token = token.map(str::to_string);
        mirror.user_id = user_id.map(str::to_string);

        info!(
            authenticated = token.is_some(),
            user_id = user_id.unwrap_or("-"),
            "Session updated"
        );
        Ok(())
    }

    /// Current token from durable storage.
    pub fn token(&self) -> StoreResult<Option<String>> {
        self.read_key(TOKEN_KEY)
    }

    /// Current user id from durable storage.
    pub fn user_id(&self) -> StoreResult<Option<String>> {
        self.read_key(USER_ID_KEY)
    }

    /// Forgets the session in memory and in storage.
    pub fn clear_auth_data(&self) -> StoreResult<()> {
        {
            let mut mirror = self.mirror.write().unwrap_or_else(|p| p.into_inner());
            *mirror = Session::default();
        }
        self.storage.delete(TOKEN_KEY)?;
        self.storage.delete(USER_ID_KEY)?;
        info!("Session cleared");
        Ok(())
    }

    /// True when durable storage holds a token.
    pub fn is_authenticated(&self) -> StoreResult<bool> {
        Ok(self.token()?.is_some())
    }

    /// Both values from durable storage.
    pub fn load(&self) -> StoreResult<Session> {
        Ok(Session {
            token: self.token()?,
            user_id: self.user_id()?,
        })
    }

    /// Copy of what this handle last wrote.
    pub fn snapshot(&self) -> Session {
        self.mirror
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    fn read_key(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.storage.get(key)?.filter(|v| !v.is_empty()))
    }

    fn write_key(&self, key: &str, value: Option<&str>) -> StoreResult<()> {
        match value {
            Some(v) => self.storage.set(key, v),
            None => self.storage.delete(key),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileStore, MemoryStore};

    #[test]
    fn test_set_and_read_back() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_auth_data(Some("tok"), Some("u1")).unwrap();

        assert_eq!(session.token().unwrap().as_deref(), Some("tok"));
        assert_eq!(session.user_id().unwrap().as_deref(), Some("u1"));
        assert!(session.is_authenticated().unwrap());
        assert_eq!(session.snapshot(), session.load().unwrap());
    }

    #[test]
    fn test_set_none_clears_both() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_auth_data(Some("tok"), Some("u1")).unwrap();
        session.set_auth_data(None, None).unwrap();

        assert_eq!(session.token().unwrap(), None);
        assert_eq!(session.user_id().unwrap(), None);
        assert!(!session.is_authenticated().unwrap());
    }

    #[test]
    fn test_empty_strings_read_as_absent() {
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, "").unwrap();
        let session = SessionStore::new(storage);

        assert_eq!(session.token().unwrap(), None);
        assert!(!session.is_authenticated().unwrap());

        session.set_auth_data(Some(""), Some("u1")).unwrap();
        assert_eq!(session.token().unwrap(), None);
        assert_eq!(session.user_id().unwrap().as_deref(), Some("u1"));
    }

    #[test]
    fn test_clear_auth_data() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_auth_data(Some("tok"), Some("u1")).unwrap();
        session.clear_auth_data().unwrap();

        assert_eq!(session.snapshot(), Session::default());
        assert_eq!(session.load().unwrap(), Session::default());
    }

    #[test]
    fn test_reads_go_through_to_shared_storage() {
        let storage = MemoryStore::new();
        let first = SessionStore::new(storage.clone());
        let second = SessionStore::new(storage);

        first.set_auth_data(Some("tok"), Some("u1")).unwrap();

        // Second handle never wrote anything, yet sees the login
        assert_eq!(second.snapshot(), Session::default());
        assert_eq!(second.token().unwrap().as_deref(), Some("tok"));

        second.clear_auth_data().unwrap();
        assert!(!first.is_authenticated().unwrap());
    }

    #[test]
    fn test_session_survives_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        SessionStore::new(FileStore::new(dir.path()))
            .set_auth_data(Some("tok"), Some("u1"))
            .unwrap();

        let reopened = SessionStore::new(FileStore::new(dir.path()));
        assert_eq!(reopened.token().unwrap().as_deref(), Some("tok"));
        assert_eq!(reopened.user_id().unwrap().as_deref(), Some("u1"));
    }

    #[test]
    fn test_debug_does_not_print_token() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_auth_data(Some("secret-token"), None).unwrap();
        let printed = format!("{:?}", session);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("has_token: true"));
    }
}
