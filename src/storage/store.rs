//! KeyValueStorage - Abstract local durable storage.

use crate::error::StorageError;

/// Whole-value key/value storage local to one device profile.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`. Returns None if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Returns true if one existed.
    fn remove_item(&self, key: &str) -> Result<bool, StorageError>;
}
