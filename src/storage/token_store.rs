/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Key/value stores used to persist the access token between runs.
//!
//! [`FileTokenStore`] plays the role browser local storage plays for a web
//! front end: a flat map of string keys to string values that survives a
//! restart. [`MemoryTokenStore`] keeps everything in-process.

use crate::error::AppError;
use crate::storage::config::StorageConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

/// Persistent string storage keyed by name
pub trait TokenStore: Send + Sync {
    /// Reads the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A single persisted value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredEntry {
    /// Stored value
    pub value: String,
    /// When the value was last written
    pub updated_at: DateTime<Utc>,
}

/// Token store backed by a JSON file
///
/// The file holds an object mapping each key to a [`StoredEntry`]. A missing
/// file reads as an empty store; writes create the parent directory.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileTokenStore {
    /// Creates a store writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Creates a store from the storage section of the configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.path.clone())
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, StoredEntry>, AppError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let entries = serde_json::from_str(&raw).map_err(|e| {
            AppError::Storage(format!("corrupt storage file {}: {e}", self.path.display()))
        })?;
        Ok(entries)
    }

    fn save(&self, entries: &BTreeMap<String, StoredEntry>) -> Result<(), AppError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)?,
            _ => {}
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Reads the full entry stored under `key`, including its timestamp
    pub fn entry(&self, key: &str) -> Result<Option<StoredEntry>, AppError> {
        let _guard = self
            .lock
            .read()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(self.load()?.remove(key))
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entry(key)?.map(|entry| entry.value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self
            .lock
            .write()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        let mut entries = self.load()?;
        entries.insert(
            key.to_string(),
            StoredEntry {
                value: value.to_string(),
                updated_at: Utc::now(),
            },
        );
        self.save(&entries)?;
        debug!("Stored '{}' in {}", key, self.path.display());
        Ok(())
    }
}
