//! Durable key-value storage port.
//!
//! The browser original kept session state in `localStorage` as an ambient
//! singleton. Here it is an explicit injected port so the cart store and
//! token store are testable without a real backend: [`MemoryStorage`] for
//! tests, [`FileStorage`] for a durable profile directory.
//!
//! The key layout is shared with the original frontend, so a profile
//! written by one is readable by the other.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Durable storage keys.
pub mod keys {
    /// Serialized array of cart lines.
    pub const CART: &str = "order";
    /// Opaque bearer token for admin requests.
    pub const ADMIN_TOKEN: &str = "admin_jwt_token";
    /// Logged-in admin username (display-only, not security-relevant).
    pub const USERNAME: &str = "username";
    /// Last successful passcode order lookup.
    pub const ORDER_HISTORY: &str = "orderHistory";
}

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for storage.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The in-memory backend's lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Durable key-value storage scoped to one session profile.
///
/// Single logical writer per key; no transactional guarantees across keys.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails; an absent key is `Ok(None)`.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to persist the value.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Deleting an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-memory storage backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// FileStorage
// =============================================================================

/// File-backed storage: one file per key under a profile directory.
///
/// This is the durable default, standing in for the browser's
/// `localStorage`. Values survive process restarts within the same profile
/// directory; the last writer wins, as with multiple tabs sharing a
/// browser profile.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a profile directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys come from the fixed `keys` module, but normalize anything
        // that would escape the profile directory.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.dir.join(safe)
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn roundtrip(storage: &dyn Storage) {
        assert_eq!(storage.load(keys::CART).unwrap(), None);

        storage.save(keys::CART, "[]").unwrap();
        assert_eq!(storage.load(keys::CART).unwrap().as_deref(), Some("[]"));

        storage.save(keys::CART, r#"[{"quantity":1}]"#).unwrap();
        assert_eq!(
            storage.load(keys::CART).unwrap().as_deref(),
            Some(r#"[{"quantity":1}]"#)
        );

        storage.remove(keys::CART).unwrap();
        assert_eq!(storage.load(keys::CART).unwrap(), None);

        // Removing an absent key is a no-op.
        storage.remove(keys::CART).unwrap();
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        roundtrip(&MemoryStorage::new());
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        roundtrip(&storage);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let storage = FileStorage::open(dir.path()).unwrap();
        storage.save(keys::USERNAME, "meseret").unwrap();
        drop(storage);

        let reopened = FileStorage::open(dir.path()).unwrap();
        assert_eq!(
            reopened.load(keys::USERNAME).unwrap().as_deref(),
            Some("meseret")
        );
    }

    #[test]
    fn test_file_storage_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        storage.save(keys::CART, "[]").unwrap();
        storage.save(keys::ADMIN_TOKEN, "t0k3n").unwrap();
        storage.remove(keys::CART).unwrap();

        assert_eq!(
            storage.load(keys::ADMIN_TOKEN).unwrap().as_deref(),
            Some("t0k3n")
        );
    }
}
