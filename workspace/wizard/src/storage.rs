use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{trace, warn};

/// Error types for the key/value storage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Storage is not available (private browsing, no window, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write, typically a quota error
    #[error("Storage write failed for key '{key}': {reason}")]
    Write { key: String, reason: String },

    /// Value could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Synchronous string key/value store with `localStorage` semantics.
///
/// Implementations are expected to be cheap handles onto one shared store:
/// two clones of a handle observe each other's writes.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value.
///
/// Missing keys, storage failures and corrupt entries all yield `None`.
pub fn read_json<S, T>(storage: &S, key: &str) -> Option<T>
where
    S: KeyValueStorage + ?Sized,
    T: DeserializeOwned,
{
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            trace!("No stored value for key '{}'", key);
            return None;
        }
        Err(e) => {
            warn!("Failed to read key '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring corrupt value stored under '{}': {}", key, e);
            None
        }
    }
}

/// Encode a value as JSON and store it.
pub fn write_json<S, T>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStorage + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    trace!("Writing {} bytes to key '{}'", raw.len(), key);
    storage.set_item(key, &raw)
}

/// In-process storage. Clones share the same entries, which is how tests
/// model two browser tabs on one origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let first = MemoryStorage::new();
        let second = first.clone();

        first.set_item("locale", "zh").unwrap();
        assert_eq!(second.get_item("locale").unwrap(), Some("zh".to_string()));

        second.remove_item("locale").unwrap();
        assert!(first.is_empty());
    }

    #[test]
    fn test_read_json_treats_corrupt_values_as_missing() {
        let storage = MemoryStorage::with_entries([("revision", "not json")]);
        assert_eq!(read_json::<_, u64>(&storage, "revision"), None);
        assert_eq!(read_json::<_, u64>(&storage, "absent"), None);
    }

    #[test]
    fn test_write_then_read_json() {
        let storage = MemoryStorage::new();
        write_json(&storage, "revision", &7u64).unwrap();
        assert_eq!(storage.get_item("revision").unwrap(), Some("7".to_string()));
        assert_eq!(read_json::<_, u64>(&storage, "revision"), Some(7));
    }
}
