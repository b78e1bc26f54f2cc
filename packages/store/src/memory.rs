use std::sync::{Arc, Mutex};

use crate::session::{StorageError, TokenStore};

/// In-memory TokenStore for testing. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        *store.slot() = Some(token.to_string());
        store
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot() = None;
        Ok(())
    }
}
