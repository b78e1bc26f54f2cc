//! # Local-storage token store
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web platform**.
//! The token is stored as a plain string under one key (default `"authToken"`,
//! see [`crate::config::SessionConfig`]).
//!
//! Reads swallow errors and return `None`: a browser with storage disabled
//! degrades to "not signed in" instead of failing to start.

use web_sys::Storage;

use crate::session::{StorageError, TokenStore};

#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok()?
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        Self::storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::storage()
            .ok_or(StorageError::Unavailable)?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}
