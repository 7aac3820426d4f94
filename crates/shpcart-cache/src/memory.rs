//! In-memory store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{validate_key, KeyValueStore, StoreError};

/// A process-local store.
///
/// Clones share the same backing map, so a second handle sees everything
/// the first one wrote. That is enough to simulate a restart in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Check if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A panic while holding the lock cannot leave a half-written value:
        // every write replaces one whole entry.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cart").unwrap(), None);
        assert!(!store.exists("cart").unwrap());
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("cart", b"[]").unwrap();
        assert_eq!(store.get("cart").unwrap(), Some(b"[]".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("cart", b"[1]").unwrap();
        assert_eq!(other.get("cart").unwrap(), Some(b"[1]".to_vec()));
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        store.set("cart", b"[]").unwrap();
        store.delete("cart").unwrap();
        store.delete("cart").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejects_invalid_key() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.set("../cart", b"[]"),
            Err(StoreError::InvalidKey(_))
        ));
    }
}
