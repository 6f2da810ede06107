//! sessionStorage-backed cache for fetched assets.
//!
//! Entries live for the browser session and disappear when the tab closes,
//! so navigation between pages reuses the episode feed while a fresh visit
//! always refetches.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;

/// Cache operation errors.
#[derive(Debug, Clone)]
pub enum CacheError {
    /// sessionStorage not available.
    StorageUnavailable,
    /// Failed to serialize data to JSON.
    SerializationFailed,
    /// Failed to write to storage (quota, private mode).
    WriteFailed,
}

/// Get cached data, or `None` if absent or unreadable.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}
