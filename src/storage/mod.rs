//! Storage - Local durable key/value storage for client-side state.
//!
//! Mirrors the browser's local storage: string values addressed by string
//! keys, read and written whole. The wishlist persists its snapshot through
//! this seam so it can run against memory in tests and against the
//! filesystem on a device.
//!
//! ## Example
//!
//! ```ignore
//! use connectspace_wishlist::{InMemoryStorage, KeyValueStorage};
//!
//! let storage = InMemoryStorage::new();
//! storage.set_item("wishlist", "[]")?;
//! assert_eq!(storage.get_item("wishlist")?.as_deref(), Some("[]"));
//! ```

mod file;
mod in_memory;
mod store;

pub use file::FileStorage;
pub use in_memory::InMemoryStorage;
pub use store::KeyValueStorage;
