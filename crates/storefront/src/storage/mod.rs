//! Local key-value persistence.
//!
//! Everything the storefront remembers lives under four keys (see [`keys`]),
//! each holding one JSON document. Backends implement [`KeyValueStore`] over
//! raw strings; [`Storage`] layers typed JSON access on top.
//!
//! # Failure policy
//!
//! Reads return `None` (or the caller's default) when a key is missing or its
//! document no longer parses. Writes are best-effort: serialization and
//! backend failures are logged and swallowed, never returned. Engines above
//! this layer therefore never see a storage error.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage keys for the persisted records.
pub mod keys {
    /// Current login session, absent when logged out.
    pub const SESSION: &str = "ecommerce_session";

    /// Cart lines.
    pub const CART: &str = "ecommerce_cart";

    /// Order history, newest first.
    pub const ORDERS: &str = "ecommerce_orders";

    /// Profile and address book; survives logout.
    pub const USER_DATA: &str = "ecommerce_user_data";

    /// Every reserved key.
    pub const ALL: [&str; 4] = [SESSION, CART, ORDERS, USER_DATA];
}

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters that cannot be used in a document name.
    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    /// A writer panicked while holding the in-memory lock.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Raw string storage backend.
pub trait KeyValueStore: Send + Sync {
    /// Read the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Delete every key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Typed JSON facade over a [`KeyValueStore`].
pub struct Storage {
    backend: Box<dyn KeyValueStore>,
}

impl Storage {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Ephemeral storage, used by tests and one-shot sessions.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    /// Durable storage rooted at `dir`, created if missing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(Self::new(FileStore::open(dir)?))
    }

    /// Read and deserialize `key`.
    ///
    /// Missing keys, backend failures, and documents that fail to parse all
    /// read as `None`.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to read from storage");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(key, error = %e, "Stored document failed to parse");
                None
            }
        }
    }

    /// Read `key`, falling back to `default`.
    #[must_use]
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Read `key`, falling back to `T::default()`.
    #[must_use]
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key).unwrap_or_default()
    }

    /// Serialize and store `value` under `key`. Failures are logged only.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to serialize value for storage");
                return;
            }
        };

        if let Err(e) = self.backend.write(key, &raw) {
            tracing::error!(key, error = %e, "Failed to write to storage");
        }
    }

    /// Delete `key`. Failures are logged only.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.delete(key) {
            tracing::error!(key, error = %e, "Failed to remove from storage");
        }
    }

    /// Delete every key. Failures are logged only.
    pub fn clear(&self) {
        if let Err(e) = self.backend.clear() {
            tracing::error!(error = %e, "Failed to clear storage");
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use serde::Deserialize;

    use super::*;

    /// Backend that fails every call.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Poisoned)
        }
        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
        fn delete(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
        fn clear(&self) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        pinned: bool,
    }

    /// Map keys must be strings for JSON; this one can't be serialized.
    fn unserializable() -> HashMap<(u8, u8), u8> {
        HashMap::from([((1, 2), 3)])
    }

    #[test]
    fn test_set_then_get() {
        let storage = Storage::in_memory();
        let note = Note {
            title: "hello".to_string(),
            pinned: true,
        };
        storage.set("note", &note);
        assert_eq!(storage.get::<Note>("note"), Some(note));
    }

    #[test]
    fn test_missing_key_uses_default() {
        let storage = Storage::in_memory();
        assert_eq!(storage.get::<Note>("note"), None);
        assert_eq!(storage.get_or("count", 7_u32), 7);
        assert!(storage.get_or_default::<Vec<u32>>("list").is_empty());
    }

    #[test]
    fn test_corrupt_document_reads_as_missing() {
        let backend = MemoryStore::default();
        backend.write("note", "{not json").unwrap();
        let storage = Storage::new(backend);
        assert_eq!(storage.get::<Note>("note"), None);
        assert_eq!(storage.get_or("note", 1_u8), 1);
    }

    #[test]
    fn test_wrong_shape_reads_as_missing() {
        let storage = Storage::in_memory();
        storage.set("note", &[1, 2, 3]);
        assert_eq!(storage.get::<Note>("note"), None);
    }

    #[test]
    fn test_serialize_failure_is_swallowed() {
        let storage = Storage::in_memory();
        storage.set("bad", &unserializable());
        assert_eq!(storage.get::<serde_json::Value>("bad"), None);
    }

    #[test]
    fn test_backend_failures_are_swallowed() {
        let storage = Storage::new(BrokenStore);
        storage.set("note", &1);
        storage.remove("note");
        storage.clear();
        assert_eq!(storage.get::<u32>("note"), None);
        assert_eq!(storage.get_or("note", 5_u32), 5);
    }

    #[test]
    fn test_remove_and_clear() {
        let storage = Storage::in_memory();
        storage.set("a", &1);
        storage.set("b", &2);
        storage.remove("a");
        storage.remove("a");
        assert_eq!(storage.get::<u32>("a"), None);
        assert_eq!(storage.get::<u32>("b"), Some(2));
        storage.clear();
        assert_eq!(storage.get::<u32>("b"), None);
    }
}
