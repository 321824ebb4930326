use std::fmt;

/// Failures raised by key/value storage and the wishlist persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A storage lock was poisoned during the named operation.
    LockPoisoned(&'static str),
    /// The backing medium failed to read or write.
    Io(String),
    /// The stored value could not be encoded or decoded.
    Serde(String),
    /// The key cannot be mapped onto the backing medium.
    InvalidKey(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StorageError::Io(message) => write!(f, "storage io error: {}", message),
            StorageError::Serde(message) => write!(f, "storage serialization error: {}", message),
            StorageError::InvalidKey(key) => write!(f, "invalid storage key: {:?}", key),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serde(err.to_string())
    }
}
