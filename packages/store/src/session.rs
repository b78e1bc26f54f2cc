//! # Session: the one piece of state that outlives a page load
//!
//! [`AuthSession`] holds the bearer token in memory and mirrors every change
//! into a [`TokenStore`]. It is created once at startup with
//! [`AuthSession::restore`] and then shared through the UI context; only the
//! login and logout handlers write to it.
//!
//! ## [`TokenStore`] implementations
//!
//! | Store | Platform | Backing |
//! |-------|----------|---------|
//! | [`crate::LocalStorageTokenStore`] | web (`web` feature) | `window.localStorage` |
//! | [`crate::FileTokenStore`] | native | a file under the platform data dir |
//! | [`crate::MemoryTokenStore`] | any | process memory, used in tests |

use thiserror::Error;

/// Persistence backend for the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("token storage is unavailable")]
    Unavailable,
    #[error("failed to write token: {0}")]
    Write(String),
}

/// The current authentication session.
#[derive(Clone, Debug)]
pub struct AuthSession<S: TokenStore> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore> AuthSession<S> {
    /// Read a previously persisted token from `store`. Empty tokens count as absent.
    pub fn restore(store: S) -> Self {
        let token = store.load().filter(|token| !token.is_empty());
        Self { store, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Adopt `token` and persist it.
    ///
    /// The in-memory token is set even when persisting fails, so the user stays
    /// signed in for this page load.
    pub fn set(&mut self, token: String) -> Result<(), StorageError> {
        let result = self.store.save(&token);
        self.token = Some(token);
        result
    }

    /// Forget the token in memory and in the backing store.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.token = None;
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTokenStore;

    #[test]
    fn test_restore_reads_persisted_token() {
        let store = MemoryTokenStore::with_token("abc");
        let session = AuthSession::restore(store);
        assert_eq!(session.token(), Some("abc"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_restore_ignores_empty_token() {
        let session = AuthSession::restore(MemoryTokenStore::with_token(""));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_set_persists_and_clear_removes() {
        let store = MemoryTokenStore::new();
        let mut session = AuthSession::restore(store.clone());
        assert!(session.token().is_none());

        session.set("X".to_string()).unwrap();
        assert_eq!(session.token(), Some("X"));
        assert_eq!(store.load().as_deref(), Some("X"));

        // A fresh session on the same store sees the token
        assert_eq!(AuthSession::restore(store.clone()).token(), Some("X"));

        session.clear().unwrap();
        assert!(session.token().is_none());
        assert!(store.load().is_none());
    }
}
