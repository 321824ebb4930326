use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use feruca::Collator;

use crate::event::Event;

use super::options::{SortKey, ViewOptions, ALL_CATEGORIES};

/// Events from one calendar month, in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup<'a> {
    /// `"January 2024"` style label.
    pub label: String,
    pub events: Vec<&'a Event>,
}

/// Filter `items` by every active option, then sort by `options.sort`.
///
/// The sort is stable, so ties keep their wishlist order.
pub fn apply<'a>(items: &'a [Event], options: &ViewOptions) -> Vec<&'a Event> {
    let mut selected: Vec<&Event> = items.iter().filter(|event| options.matches(event)).collect();
    let mut collator = Collator::default();
    selected.sort_by(|a, b| compare(&mut collator, options.sort, a, b));
    selected
}

fn compare(collator: &mut Collator, sort: SortKey, a: &Event, b: &Event) -> Ordering {
    match sort {
        SortKey::DateAsc => a.date.cmp(&b.date),
        SortKey::DateDesc => b.date.cmp(&a.date),
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
        SortKey::TitleAsc => compare_titles(collator, &a.title, &b.title),
        SortKey::TitleDesc => compare_titles(collator, &b.title, &a.title),
    }
}

// Unicode collation (CLDR root order), raw text breaks the tie.
fn compare_titles(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}

/// Bucket `sorted` by calendar month.
///
/// Buckets appear in the order their first event is met, so a non-date sort
/// yields buckets in sort order rather than calendar order.
pub fn group_by_month<'a>(sorted: &[&'a Event]) -> Vec<MonthGroup<'a>> {
    let mut groups: Vec<MonthGroup<'a>> = Vec::new();
    for &event in sorted {
        let label = event.month_label();
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.events.push(event),
            None => groups.push(MonthGroup {
                label,
                events: vec![event],
            }),
        }
    }
    groups
}

/// Keep events dated from `today` through `today + window_days`, both inclusive.
pub fn upcoming<'a>(sorted: &[&'a Event], today: NaiveDate, window_days: u32) -> Vec<&'a Event> {
    let end = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    sorted
        .iter()
        .copied()
        .filter(|event| event.date >= today && event.date <= end)
        .collect()
}

/// Category choices for the filter menu: `"All"`, then each distinct
/// category in the order it first appears.
///
/// A category literally named `"All"` is not listed again; it cannot be
/// selected apart from the "All" choice.
pub fn categories(items: &[Event]) -> Vec<String> {
    let mut seen = HashSet::from([ALL_CATEGORIES]);
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for event in items {
        if seen.insert(event.category.as_str()) {
            categories.push(event.category.clone());
        }
    }
    categories
}
