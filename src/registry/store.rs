use crate::error::StoreError;
use ahash::AHashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Storage key for the persisted custom agent catalog.
pub const CUSTOM_CATALOG_KEY: &str = "custom-agents";
/// Storage key for the persisted favorites set.
pub const FAVORITES_KEY: &str = "favorite-agents";

/// The persistence boundary of the definition registry: an opaque key-value
/// store holding the custom catalog and the favorites set under fixed keys.
///
/// The registry writes through synchronously after every mutation, so an
/// implementation only needs plain blocking reads and writes. Injecting the
/// store keeps the engine testable against [`MemoryStore`].
pub trait CatalogStore {
    /// Returns the value stored under `key`, or `None` if the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// An in-memory store for tests and hosts that do not persist anything.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: AHashMap<String, String>,
}

impl CatalogStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A file-backed store keeping one JSON file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl CatalogStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        fs::write(self.path_for(key), value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}
