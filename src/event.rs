//! The saved `Event` record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier of an event, used as the wishlist set key.
pub type EventId = u64;

/// An event a user can save to their wishlist.
///
/// Field names serialize in camelCase so snapshots written by the web
/// client hydrate unchanged. Optional fields are omitted when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub location: String,
    pub category: String,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub organizer: String,
    pub attendees: u32,
    pub max_attendees: u32,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_name: Option<String>,
}

impl Event {
    /// Create an event with the given identity and empty display fields.
    pub fn new(id: EventId, title: &str, date: NaiveDate) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            date,
            time: String::new(),
            end_time: None,
            location: String::new(),
            category: String::new(),
            price: 0,
            image: None,
            organizer: String::new(),
            attendees: 0,
            max_attendees: 0,
            tags: Vec::new(),
            featured: None,
            community_id: None,
            community_name: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_time(mut self, time: &str, end_time: Option<&str>) -> Self {
        self.time = time.to_string();
        self.end_time = end_time.map(str::to_string);
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_price(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    pub fn with_organizer(mut self, organizer: &str) -> Self {
        self.organizer = organizer.to_string();
        self
    }

    pub fn with_attendance(mut self, attendees: u32, max_attendees: u32) -> Self {
        self.attendees = attendees;
        self.max_attendees = max_attendees;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn with_community(mut self, community_id: u64, community_name: &str) -> Self {
        self.community_id = Some(community_id);
        self.community_name = Some(community_name.to_string());
        self
    }

    /// `true` when the event costs nothing.
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    /// Case-insensitive substring match against title, description, or any tag.
    ///
    /// An empty query matches every event.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Human-readable month bucket, e.g. `"January 2024"`.
    pub fn month_label(&self) -> String {
        self.date.format("%B %Y").to_string()
    }

    /// Fraction of seats taken. Display only; may exceed 1.0.
    pub fn attendance_ratio(&self) -> Option<f64> {
        if self.max_attendees == 0 {
            return None;
        }
        Some(f64::from(self.attendees) / f64::from(self.max_attendees))
    }
}
