//! WishlistPersistence - Load/save seam between the store and durable storage.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::event::Event;
use crate::storage::KeyValueStorage;

/// Durable snapshot of the wishlist. Always read and written whole.
pub trait WishlistPersistence: Send + Sync {
    /// Load the stored snapshot. Returns None if nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Event>>, StorageError>;

    /// Replace the stored snapshot with `items`.
    fn save(&self, items: &[Event]) -> Result<(), StorageError>;
}

/// Persists the wishlist as a JSON array under one key of a [`KeyValueStorage`].
#[derive(Debug, Clone)]
pub struct StoragePersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> StoragePersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Access the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> WishlistPersistence for StoragePersistence<S> {
    fn load(&self) -> Result<Option<Vec<Event>>, StorageError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(decode_snapshot(&self.key, &raw)?))
    }

    fn save(&self, items: &[Event]) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(items)?;
        self.storage.set_item(&self.key, &encoded)?;
        debug!(key = %self.key, count = items.len(), "saved wishlist snapshot");
        Ok(())
    }
}

/// Decode a snapshot, dropping entries that are not event-shaped.
///
/// Fails only when the value is not a JSON array.
fn decode_snapshot(key: &str, raw: &str) -> Result<Vec<Event>, StorageError> {
    let entries: Vec<Value> = serde_json::from_str(raw)?;
    let total = entries.len();

    let items: Vec<Event> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    if items.len() < total {
        warn!(
            key,
            dropped = total - items.len(),
            kept = items.len(),
            "dropped malformed wishlist entries"
        );
    }
    Ok(items)
}
