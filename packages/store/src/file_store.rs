//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the bearer token in a single file. It is the
//! native counterpart of [`crate::LocalStorageTokenStore`] and is used when
//! the UI runs outside the browser.
//!
//! The UI builds the path from `dirs::data_dir()`, e.g.
//! `~/.local/share/corpus-dashboard/authToken` on Linux.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::session::{StorageError, TokenStore};

#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }
        std::fs::write(&self.path, token).map_err(|e| StorageError::Write(e.to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::AuthSession;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("corpus_token_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("authToken");

        let mut session = AuthSession::restore(FileTokenStore::new(path.clone()));
        assert!(!session.is_authenticated());
        session.set("token-123".to_string()).unwrap();

        // Re-open from same path
        let reopened = AuthSession::restore(FileTokenStore::new(path.clone()));
        assert_eq!(reopened.token(), Some("token-123"));

        session.clear().unwrap();
        assert!(!path.exists());
        // Clearing twice is fine
        session.clear().unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }
}
