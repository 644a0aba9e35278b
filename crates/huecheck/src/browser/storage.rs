//! Browser storage bindings for localStorage and sessionStorage.
//!
//! Provides a unified API for persisting data in the browser, including
//! entries that expire after a time-to-live.
//!
//! # Example
//!
//! ```ignore
//! use huecheck::browser::storage::{Storage, StorageType};
//!
//! let storage = Storage::new(StorageType::Local);
//! storage.set("key", "value");
//! let value = storage.get("key");
//! ```

use serde::{de::DeserializeOwned, Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Storage type (local or session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageType {
    /// localStorage - persists across browser sessions
    #[default]
    Local,
    /// sessionStorage - cleared when browser tab closes
    Session,
}

/// Get/set contract for string key/value stores.
///
/// Preferences are written against this trait so the UI layer can inject
/// browser storage, a scoped view of it, or a test double.
pub trait KeyValueStore {
    /// Get a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Get a value and deserialize it as JSON.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.get(key)
            .map(|json| serde_json::from_str(&json).map_err(StorageError::from))
            .transpose()
    }

    /// Serialize a value as JSON and store it.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.set(key, &json)
    }

    /// Store a value that stops being returned after `ttl`.
    fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StorageError> {
        let entry = ExpiringEntry {
            value: value.to_string(),
            expiry: now_ms().saturating_add(ttl.as_millis() as u64),
        };
        self.set_json(key, &entry)
    }

    /// Get a value stored with [`set_with_expiry`](Self::set_with_expiry).
    ///
    /// Expired or malformed entries are removed and read as absent.
    fn get_with_expiry(&self, key: &str) -> Option<String> {
        match self.get_json::<ExpiringEntry>(key) {
            Ok(Some(entry)) if now_ms() < entry.expiry => Some(entry.value),
            Ok(None) => None,
            _ => {
                if let Err(err) = self.remove(key) {
                    tracing::debug!(key, error = %err, "could not drop expired entry");
                }
                None
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ExpiringEntry {
    value: String,
    /// Milliseconds since the Unix epoch
    expiry: u64,
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

/// Browser storage interface.
///
/// In WASM, this uses actual localStorage/sessionStorage.
/// In tests/non-WASM, this uses an in-memory fallback.
#[derive(Debug)]
pub struct Storage {
    storage_type: StorageType,
    /// In-memory fallback for non-WASM environments
    #[cfg(not(target_arch = "wasm32"))]
    memory: std::sync::Mutex<HashMap<String, String>>,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new(StorageType::Local)
    }
}

impl Storage {
    /// Create a new storage instance.
    #[must_use]
    pub fn new(storage_type: StorageType) -> Self {
        Self {
            storage_type,
            #[cfg(not(target_arch = "wasm32"))]
            memory: std::sync::Mutex::new(HashMap::new()),
        }
    }

    /// Create localStorage instance.
    #[must_use]
    pub fn local() -> Self {
        Self::new(StorageType::Local)
    }

    /// Create sessionStorage instance.
    #[must_use]
    pub fn session() -> Self {
        Self::new(StorageType::Session)
    }

    /// Get the storage type.
    #[must_use]
    pub const fn storage_type(&self) -> StorageType {
        self.storage_type
    }

    /// Get the number of items in storage.
    #[must_use]
    pub fn len(&self) -> usize {
        #[cfg(target_arch = "wasm32")]
        {
            self.get_storage()
                .and_then(|s| s.length().ok())
                .unwrap_or(0) as usize
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory.lock().map(|m| m.len()).unwrap_or(0)
        }
    }

    /// Check if storage is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all keys in storage.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(storage) = self.get_storage() else {
                return Vec::new();
            };
            (0..self.len() as u32)
                .filter_map(|i| storage.key(i).ok().flatten())
                .collect()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map(|m| m.keys().cloned().collect())
                .unwrap_or_default()
        }
    }

    /// Clear all values in storage.
    pub fn clear(&self) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.get_storage()
                .ok_or(StorageError::NotAvailable)?
                .clear()
                .map_err(|_| StorageError::AccessDenied)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .clear();
            Ok(())
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn get_storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.storage_type {
            StorageType::Local => window.local_storage().ok()?,
            StorageType::Session => window.session_storage().ok()?,
        }
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.get_storage()?.get_item(key).ok()?
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory.lock().ok()?.get(key).cloned()
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.get_storage()
                .ok_or(StorageError::NotAvailable)?
                .set_item(key, value)
                .map_err(|_| StorageError::QuotaExceeded)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.get_storage()
                .ok_or(StorageError::NotAvailable)?
                .remove_item(key)
                .map_err(|_| StorageError::AccessDenied)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .remove(key);
            Ok(())
        }
    }
}

/// Storage error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage is not available (e.g., in incognito mode)
    #[error("storage not available")]
    NotAvailable,
    /// Storage quota exceeded
    #[error("storage quota exceeded")]
    QuotaExceeded,
    /// Access denied
    #[error("storage access denied")]
    AccessDenied,
    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Scoped storage with automatic key prefixing.
///
/// Keeps huecheck's keys apart from anything else on the same origin.
#[derive(Debug)]
pub struct ScopedStorage {
    inner: Storage,
    prefix: String,
}

impl ScopedStorage {
    /// Create a new scoped storage with the given prefix.
    #[must_use]
    pub fn new(storage: Storage, prefix: impl Into<String>) -> Self {
        Self {
            inner: storage,
            prefix: prefix.into(),
        }
    }

    /// Create a localStorage instance with the given prefix.
    #[must_use]
    pub fn local(prefix: impl Into<String>) -> Self {
        Self::new(Storage::local(), prefix)
    }

    /// Get the prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn prefixed_key(&self, key: &str) -> String {
        format!("{}:{}", self.prefix, key)
    }

    /// Clear all values with this prefix.
    pub fn clear(&self) -> Result<(), StorageError> {
        let scope = format!("{}:", self.prefix);
        for key in self.inner.keys().into_iter().filter(|k| k.starts_with(&scope)) {
            self.inner.remove(&key)?;
        }
        Ok(())
    }
}

impl KeyValueStore for ScopedStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(&self.prefixed_key(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(&self.prefixed_key(key), value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(&self.prefixed_key(key))
    }
}
