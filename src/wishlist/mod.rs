//! Wishlist - The user's saved events, persisted locally and shared by handle.
//!
//! A [`WishlistStore`] owns the canonical set, a [`WishlistPersistence`]
//! adapter mirrors it to durable storage after every change, and subscribers
//! receive a [`WishlistChange`] for each applied mutation.
//!
//! ## Example
//!
//! ```ignore
//! use connectspace_wishlist::{FileStorage, StoragePersistence, WishlistConfig, WishlistStore};
//!
//! let config = WishlistConfig::default();
//! let persistence = StoragePersistence::new(FileStorage::new(data_dir), &config.storage_key);
//! let store = WishlistStore::open(persistence, config);
//!
//! store.add(event);
//! let saved = store.view(&ViewOptions::default());
//! ```

mod change;
mod persistence;
mod store;

pub use change::{Subscription, WishlistChange};
pub use persistence::{StoragePersistence, WishlistPersistence};
pub use store::WishlistStore;
