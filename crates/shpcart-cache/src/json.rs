//! Typed JSON access over any store.

use serde::{de::DeserializeOwned, Serialize};

use crate::{KeyValueStore, StoreError};

/// Type-safe wrapper that serializes values as JSON.
///
/// Any type that implements `Serialize` and `DeserializeOwned` can be
/// stored. A value that no longer decodes as `T` is reported as
/// [`StoreError::Serialize`]; deciding what to do about it is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct JsonCache<S> {
    store: S,
}

impl<S: KeyValueStore> JsonCache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value, replacing whatever was stored before.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
