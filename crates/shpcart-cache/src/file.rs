//! File-backed store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{validate_key, KeyValueStore, StoreError};

/// Stores each key as `<dir>/<key>.json`.
///
/// The directory is created on first write. Values are written to a
/// temporary file in the same directory and renamed into place, so a reader
/// sees either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` as the data directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;

        tracing::trace!(path = %path.display(), bytes = value.len(), "wrote store entry");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("shpcart_cart").unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("data"));
        store.set("shpcart_cart", b"[]").unwrap();

        let path = store.path_for("shpcart_cart").unwrap();
        assert!(path.exists());
        assert_eq!(fs::read(path).unwrap(), b"[]");
    }

    #[test]
    fn test_overwrite_replaces_whole_value() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("cart", b"[{\"productId\":1,\"quantity\":2}]").unwrap();
        store.set("cart", b"[]").unwrap();
        assert_eq!(store.get("cart").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_new_handle_sees_previous_writes() {
        let dir = tempdir().unwrap();
        FileStore::new(dir.path()).set("cart", b"[1]").unwrap();
        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get("cart").unwrap(), Some(b"[1]".to_vec()));
    }

    #[test]
    fn test_delete_missing_is_ok() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.delete("cart").unwrap();
        store.set("cart", b"[]").unwrap();
        store.delete("cart").unwrap();
        assert!(!store.exists("cart").unwrap());
    }

    #[test]
    fn test_key_cannot_escape_directory() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.path_for("../outside"),
            Err(StoreError::InvalidKey(_))
        ));
    }
}
