//! Preference persistence
//!
//! User preferences are JSON-serialized values stored under namespaced keys
//! (`sistemaPerito_<key>`) in a raw string key-value store. The store sits
//! behind the [`StorageBackend`] trait: [`FileStorage`] persists the map as a
//! JSON file under the platform data directory, and [`MemoryStorage`] serves
//! tests and environments where persistent storage is unavailable.
//!
//! No failure propagates to callers: a save that cannot be written or a read
//! that cannot be parsed is recorded on the diagnostics sink and the caller
//! gets a no-op or the default value, matching how the pages treat disabled
//! or full browser storage.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::constants::{APP_DIR_NAME, STORAGE_FILE_NAME, STORAGE_PREFIX};
use crate::logger::Diagnostics;

/// Failure classes for the raw key-value store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Raw string key-value store scoped to the application
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and storage-disabled environments
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))?;
        items.remove(key);
        Ok(())
    }
}

/// File-backed store: the whole key-value map is one JSON file on disk,
/// read and rewritten per operation
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build a file store from a loaded configuration, falling back to the
    /// platform data directory when no file is configured
    pub fn from_config(config: &Config) -> Result<Self, StorageError> {
        match &config.storage.file {
            Some(path) => Ok(Self::new(path.clone())),
            None => Self::default_path()
                .map(Self::new)
                .ok_or_else(|| StorageError::Unavailable("no data directory available".to_string())),
        }
    }

    /// Standard location: `<data-dir>/sistema-perito/preferences.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join(STORAGE_FILE_NAME))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn store_map(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load_map()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.load_map()?;
        items.insert(key.to_string(), value.to_string());
        self.store_map(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.load_map()?;
        items.remove(key);
        self.store_map(&items)
    }
}

/// Typed preference store over a raw backend
///
/// Values round-trip through JSON, so anything `serde_json` can represent is
/// preserved exactly.
pub struct PreferenceStore {
    backend: Box<dyn StorageBackend>,
    diagnostics: Diagnostics,
}

impl PreferenceStore {
    pub fn new(backend: Box<dyn StorageBackend>, diagnostics: Diagnostics) -> Self {
        Self { backend, diagnostics }
    }

    /// Serialize and save a preference. Failures are recorded and swallowed.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let full_key = namespaced_key(key);

        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                self.diagnostics.record(format!("failed to serialize preference '{}': {}", key, e));
                log::error!("failed to serialize preference '{}': {}", key, e);
                return;
            }
        };

        if let Err(e) = self.backend.set_item(&full_key, &payload) {
            self.diagnostics.record(format!("failed to save preference '{}': {}", key, e));
            log::error!("failed to save preference '{}': {}", key, e);
        }
    }

    /// Read and deserialize a preference; `None` when absent or unreadable
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let full_key = namespaced_key(key);

        let raw = match self.backend.get_item(&full_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                self.diagnostics.record(format!("failed to read preference '{}': {}", key, e));
                log::error!("failed to read preference '{}': {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                self.diagnostics.record(format!("failed to parse preference '{}': {}", key, e));
                log::error!("failed to parse preference '{}': {}", key, e);
                None
            }
        }
    }

    /// [`PreferenceStore::get`] with a fallback for absent or unreadable keys
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Delete a preference. Failures are recorded and swallowed.
    pub fn remove(&self, key: &str) {
        let full_key = namespaced_key(key);
        if let Err(e) = self.backend.remove_item(&full_key) {
            self.diagnostics.record(format!("failed to remove preference '{}': {}", key, e));
            log::error!("failed to remove preference '{}': {}", key, e);
        }
    }
}

fn namespaced_key(key: &str) -> String {
    format!("{}_{}", STORAGE_PREFIX, key)
}
