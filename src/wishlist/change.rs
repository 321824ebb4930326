use serde::{Deserialize, Serialize};

use crate::event::EventId;

/// Emitter channel every wishlist change is published on.
pub(crate) const CHANGED: &str = "wishlist:changed";

/// A change to the wishlist, delivered to subscribers after it is applied.
///
/// `count` is the number of saved events after the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WishlistChange {
    Added { id: EventId, count: usize },
    Removed { id: EventId, count: usize },
    Cleared,
}

impl WishlistChange {
    /// Number of saved events after the change.
    pub fn count(&self) -> usize {
        match self {
            WishlistChange::Added { count, .. } | WishlistChange::Removed { count, .. } => *count,
            WishlistChange::Cleared => 0,
        }
    }
}

/// Handle returned by `WishlistStore::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: String,
}

impl Subscription {
    pub(crate) fn new(id: String) -> Self {
        Self { id }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }
}
