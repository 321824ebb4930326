use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Storage key the web client has always used for the wishlist snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "wishlist";

/// Wishlist store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WishlistConfig {
    /// Key the snapshot is persisted under.
    pub storage_key: String,
    /// How many demo events seed a profile with no stored snapshot. `0` disables seeding.
    pub bootstrap_len: usize,
    /// Length of the "upcoming" window in days, inclusive of both ends.
    pub upcoming_window_days: u32,
}

impl Default for WishlistConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            bootstrap_len: 3,
            upcoming_window_days: 7,
        }
    }
}

impl WishlistConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_bootstrap_len(mut self, len: usize) -> Self {
        self.bootstrap_len = len;
        self
    }

    pub fn with_upcoming_window_days(mut self, days: u32) -> Self {
        self.upcoming_window_days = days;
        self
    }
}
