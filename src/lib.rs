//! ConnectSpace wishlist: the events a user has saved, kept in a shared
//! store, mirrored to local durable storage, and presented through pure
//! filter / sort / group views.

mod config;
pub mod demo;
mod error;
mod event;
mod storage;
pub mod view;
mod wishlist;

pub use config::{WishlistConfig, DEFAULT_STORAGE_KEY};
pub use error::StorageError;
pub use event::{Event, EventId};
pub use storage::{FileStorage, InMemoryStorage, KeyValueStorage};
pub use view::{
    CategoryFilter, MonthGroup, PriceFilter, SortKey, ViewOptions, WishlistSummary,
};
pub use wishlist::{
    StoragePersistence, Subscription, WishlistChange, WishlistPersistence, WishlistStore,
};
