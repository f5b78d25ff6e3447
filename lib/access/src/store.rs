//! Session store: the single source of truth for "who is logged in".
//!
//! The store owns the canonical [`Session`] value and persists it across
//! reloads through a [`SessionStorage`] backend. The backend is injected
//! at construction so tests can substitute an in-memory fake for browser
//! local storage.
//!
//! Two keys are persisted: the raw bearer token and the JSON-serialized
//! principal. The pair is written and cleared together; restoration
//! treats a half-present pair the same as a corrupt one. No storage
//! failure ever escapes the store. Every failure path resolves to a
//! well-defined session state and a log line.

use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::credential::Credential;
use crate::error::StorageError;
use crate::principal::Principal;
use crate::session::Session;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON-serialized principal.
pub const PRINCIPAL_KEY: &str = "user";

/// Durable key-value backend for session persistence.
///
/// Implemented over browser local storage in the web application and by
/// [`MemoryStorage`] in tests. Methods take `&self`; backends that need
/// mutation use interior mutability.
pub trait SessionStorage {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`, if present.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Single source of truth for the authenticated session.
///
/// Owns the in-memory [`Session`] and the persistence backend. All
/// mutation goes through [`restore`](Self::restore),
/// [`login`](Self::login), and [`logout`](Self::logout); consumers read
/// through the accessors. Login and logout replace the whole session
/// value, so consumers can never observe a partial state.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Creates a store over the given backend.
    ///
    /// The session starts as [`Session::Restoring`]; call
    /// [`restore`](Self::restore) to settle it before any guard decision
    /// is rendered.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: Session::Restoring,
        }
    }

    /// Restores a persisted session, if one survives intact.
    ///
    /// The session becomes `Authenticated` only when both persisted keys
    /// are present and the principal deserializes. Any read failure,
    /// missing half of the pair, or corrupt principal gets the same
    /// cleanup as [`logout`](Self::logout) and yields `Anonymous`. This
    /// never fails outward, and the restoring state is always cleared.
    pub fn restore(&mut self) {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "session restore failed, treating as logged out");
                self.discard_persisted();
                self.session = Session::Anonymous;
                return;
            }
        };
        let principal_json = match self.storage.get(PRINCIPAL_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "session restore failed, treating as logged out");
                self.discard_persisted();
                self.session = Session::Anonymous;
                return;
            }
        };

        self.session = match (token, principal_json) {
            (Some(token), Some(json)) => match serde_json::from_str::<Principal>(&json) {
                Ok(principal) => {
                    debug!(user_id = %principal.id(), role = %principal.role(), "session restored");
                    Session::Authenticated {
                        principal,
                        credential: Credential::new(token),
                    }
                }
                Err(e) => {
                    warn!(error = %e, "discarding corrupt persisted principal");
                    self.discard_persisted();
                    Session::Anonymous
                }
            },
            (None, None) => {
                debug!("no persisted session");
                Session::Anonymous
            }
            _ => {
                // One key without the other; same treatment as corruption.
                warn!("discarding half-present persisted session");
                self.discard_persisted();
                Session::Anonymous
            }
        };
    }

    /// Establishes a session for a freshly authenticated principal.
    ///
    /// Sets the in-memory session and persists both keys. No validation
    /// of the credential's shape happens here; that is the server's job.
    /// A persistence failure is logged and otherwise ignored: the
    /// in-memory session stands for the life of the page, it simply will
    /// not survive a reload.
    pub fn login(&mut self, principal: Principal, credential: Credential) {
        match serde_json::to_string(&principal) {
            Ok(json) => {
                if let Err(e) = self.storage.set(TOKEN_KEY, credential.as_str()) {
                    warn!(error = %e, "session not persisted, will not survive reload");
                }
                if let Err(e) = self.storage.set(PRINCIPAL_KEY, &json) {
                    warn!(error = %e, "principal not persisted, will not survive reload");
                }
            }
            Err(e) => {
                warn!(error = %e, "principal not serializable, session will not survive reload");
            }
        }

        debug!(user_id = %principal.id(), role = %principal.role(), "session established");
        self.session = Session::Authenticated {
            principal,
            credential,
        };
    }

    /// Clears the session and removes the persisted copies.
    ///
    /// Unconditional and idempotent: calling it with no session present
    /// is a no-op beyond the storage removal attempts.
    pub fn logout(&mut self) {
        self.session = Session::Anonymous;
        self.discard_persisted();
        debug!("session cleared");
    }

    /// Returns the current session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the authenticated principal, if present.
    #[must_use]
    pub fn current_principal(&self) -> Option<&Principal> {
        self.session.principal()
    }

    /// Returns the bearer credential, if present.
    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        self.session.credential()
    }

    /// Returns true while startup restoration is incomplete.
    #[must_use]
    pub fn is_restoring(&self) -> bool {
        self.session.is_restoring()
    }

    /// Returns the storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn discard_persisted(&self) {
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            warn!(error = %e, "failed to remove persisted token");
        }
        if let Err(e) = self.storage.remove(PRINCIPAL_KEY) {
            warn!(error = %e, "failed to remove persisted principal");
        }
    }
}

/// In-memory [`SessionStorage`] backend.
///
/// Stands in for browser local storage in tests and examples.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use ecocycle_core::UserId;

    /// Backend where every operation fails, as when the browser has
    /// storage disabled entirely.
    struct FailingStorage;

    impl SessionStorage for FailingStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::ReadFailed {
                key: key.to_string(),
                reason: "storage disabled".to_string(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "storage disabled".to_string(),
            })
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::RemoveFailed {
                key: key.to_string(),
                reason: "storage disabled".to_string(),
            })
        }
    }

    fn test_principal() -> Principal {
        Principal::new(
            UserId::new(21),
            "maya@example.com".to_string(),
            "Maya".to_string(),
            "Okafor".to_string(),
            Role::Individual,
        )
    }

    #[test]
    fn new_store_is_restoring() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(store.is_restoring());
        assert!(store.current_principal().is_none());
        assert!(store.credential().is_none());
    }

    #[test]
    fn restore_without_persisted_state_is_anonymous() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.restore();

        assert!(!store.is_restoring());
        assert_eq!(store.session(), &Session::Anonymous);
    }

    #[test]
    fn restore_with_valid_pair_authenticates() {
        let storage = MemoryStorage::new();
        let principal = test_principal();
        storage.set(TOKEN_KEY, "tok_live").expect("seed token");
        storage
            .set(
                PRINCIPAL_KEY,
                &serde_json::to_string(&principal).expect("serialize"),
            )
            .expect("seed principal");

        let mut store = SessionStore::new(storage);
        store.restore();

        assert!(!store.is_restoring());
        assert_eq!(store.current_principal(), Some(&principal));
        assert_eq!(store.credential().map(Credential::as_str), Some("tok_live"));
    }

    #[test]
    fn restore_with_corrupt_principal_clears_storage() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok_live").expect("seed token");
        storage
            .set(PRINCIPAL_KEY, "{not valid json")
            .expect("seed principal");

        let mut store = SessionStore::new(storage);
        store.restore();

        assert!(!store.is_restoring());
        assert_eq!(store.session(), &Session::Anonymous);
        assert_eq!(store.storage().get(TOKEN_KEY).expect("read"), None);
        assert_eq!(store.storage().get(PRINCIPAL_KEY).expect("read"), None);
    }

    #[test]
    fn restore_with_unknown_role_clears_storage() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok_live").expect("seed token");
        storage
            .set(
                PRINCIPAL_KEY,
                r#"{"id":1,"email":"a@b.c","first_name":"A","last_name":"B","user_type":"superuser"}"#,
            )
            .expect("seed principal");

        let mut store = SessionStore::new(storage);
        store.restore();

        assert_eq!(store.session(), &Session::Anonymous);
        assert_eq!(store.storage().get(PRINCIPAL_KEY).expect("read"), None);
    }

    #[test]
    fn restore_with_token_but_no_principal_clears_storage() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok_orphan").expect("seed token");

        let mut store = SessionStore::new(storage);
        store.restore();

        assert_eq!(store.session(), &Session::Anonymous);
        assert_eq!(store.storage().get(TOKEN_KEY).expect("read"), None);
    }

    #[test]
    fn restore_with_principal_but_no_token_clears_storage() {
        let storage = MemoryStorage::new();
        let principal = test_principal();
        storage
            .set(
                PRINCIPAL_KEY,
                &serde_json::to_string(&principal).expect("serialize"),
            )
            .expect("seed principal");

        let mut store = SessionStore::new(storage);
        store.restore();

        assert_eq!(store.session(), &Session::Anonymous);
        assert_eq!(store.storage().get(PRINCIPAL_KEY).expect("read"), None);
    }

    #[test]
    fn restore_with_unreadable_storage_is_anonymous() {
        let mut store = SessionStore::new(FailingStorage);
        store.restore();

        assert!(!store.is_restoring());
        assert_eq!(store.session(), &Session::Anonymous);
    }

    #[test]
    fn login_sets_session_and_persists_both_keys() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.restore();

        let principal = test_principal();
        store.login(principal.clone(), Credential::new("tok_live".to_string()));

        assert_eq!(store.current_principal(), Some(&principal));
        assert_eq!(
            store.storage().get(TOKEN_KEY).expect("read"),
            Some("tok_live".to_string())
        );

        let stored = store
            .storage()
            .get(PRINCIPAL_KEY)
            .expect("read")
            .expect("principal persisted");
        let roundtrip: Principal = serde_json::from_str(&stored).expect("deserialize");
        assert_eq!(roundtrip, principal);
    }

    #[test]
    fn login_survives_write_failures_in_memory() {
        let mut store = SessionStore::new(FailingStorage);
        store.restore();

        store.login(test_principal(), Credential::new("tok_live".to_string()));

        assert!(store.session().is_authenticated());
        assert_eq!(
            store.current_principal().map(Principal::role),
            Some(Role::Individual)
        );
    }

    #[test]
    fn logout_clears_session_and_storage() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.restore();
        store.login(test_principal(), Credential::new("tok_live".to_string()));

        store.logout();

        assert_eq!(store.session(), &Session::Anonymous);
        assert_eq!(store.storage().get(TOKEN_KEY).expect("read"), None);
        assert_eq!(store.storage().get(PRINCIPAL_KEY).expect("read"), None);
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.restore();

        store.logout();
        store.logout();

        assert_eq!(store.session(), &Session::Anonymous);
    }

    #[test]
    fn login_then_logout_leaves_no_persisted_keys() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.restore();

        store.login(test_principal(), Credential::new("tok_live".to_string()));
        store.logout();

        assert_eq!(store.storage().get(TOKEN_KEY).expect("read"), None);
        assert_eq!(store.storage().get(PRINCIPAL_KEY).expect("read"), None);
    }
}
