//! Views - Pure read views over a wishlist snapshot.
//!
//! Everything here is a function of `(items, options)`: no I/O, no shared
//! state, and identical inputs always give an identical ordering. Filters
//! combine with AND, then a single stable sort orders the survivors; month
//! grouping and the upcoming window are computed from that sorted result.
//!
//! ## Example
//!
//! ```ignore
//! use connectspace_wishlist::view::{self, PriceFilter, SortKey, ViewOptions};
//!
//! let options = ViewOptions::new()
//!     .with_category("Technology")
//!     .with_price(PriceFilter::Free)
//!     .with_sort(SortKey::DateAsc);
//!
//! let sorted = view::apply(&items, &options);
//! for group in view::group_by_month(&sorted) {
//!     println!("{}: {}", group.label, group.events.len());
//! }
//! ```

mod options;
mod query;
mod summary;

pub use options::{
    CategoryFilter, ParseSortKeyError, PriceFilter, SortKey, ViewOptions, ALL_CATEGORIES,
};
pub use query::{apply, categories, group_by_month, upcoming, MonthGroup};
pub use summary::WishlistSummary;
