//! Browser-local preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller talks to a [`PreferenceStore`] rather than to
//! `localStorage` directly, so its persistence rules can be exercised on the
//! host with [`MemoryStore`]. [`LocalStorage`] is the hydrate-only backend.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String key/value persistence scoped to the page's origin.
pub trait PreferenceStore {
    /// Read `key`. Missing keys and unreadable storage both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and for browsers with storage disabled.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`, resolved lazily on each access.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            _ => Err(StorageError::Unavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage();
        match storage.map(|s| s.get_item(key)) {
            Ok(Ok(value)) => value,
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|err| StorageError::Write {
            key: key.to_owned(),
            reason: format!("{err:?}"),
        })
    }
}
