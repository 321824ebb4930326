use chrono::NaiveDate;
use serde::Serialize;

use crate::event::Event;

use super::query;

/// Stat cards shown above the wishlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistSummary {
    pub total: usize,
    pub free: usize,
    pub paid: usize,
    pub upcoming: usize,
    /// Sum of ticket prices across every saved event.
    pub total_price: u64,
}

impl WishlistSummary {
    pub fn from_items(items: &[Event], today: NaiveDate, window_days: u32) -> Self {
        let free = items.iter().filter(|event| event.is_free()).count();
        let all: Vec<&Event> = items.iter().collect();
        Self {
            total: items.len(),
            free,
            paid: items.len() - free,
            upcoming: query::upcoming(&all, today, window_days).len(),
            total_price: items.iter().map(|event| u64::from(event.price)).sum(),
        }
    }
}
