//! Built-in demo events shown on a fresh profile.

use chrono::NaiveDate;

use crate::event::Event;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// The demo catalogue, in display order. A fresh wishlist is seeded with a prefix of it.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new(1, "Tech Innovation Summit 2025", date(2025, 3, 15))
            .with_description(
                "Talks and workshops on AI, cloud infrastructure, and developer tooling.",
            )
            .with_time("09:00", Some("17:00"))
            .with_location("Moscone Center, San Francisco, CA")
            .with_category("Technology")
            .with_price(299)
            .with_image("/images/events/tech-summit.jpg")
            .with_organizer("TechForward")
            .with_attendance(842, 1200)
            .with_tags(["AI", "Cloud", "Networking"])
            .with_featured(true)
            .with_community(1, "Bay Area Developers"),
        Event::new(2, "Community Garden Workday", date(2025, 3, 22))
            .with_description("Spring planting, compost building, and a potluck lunch.")
            .with_time("10:00", Some("14:00"))
            .with_location("Riverside Community Garden, Portland, OR")
            .with_category("Community")
            .with_organizer("Green Thumbs Collective")
            .with_attendance(34, 60)
            .with_tags(["Outdoors", "Volunteering", "Sustainability"])
            .with_community(4, "Portland Gardeners"),
        Event::new(3, "Jazz Under the Stars", date(2025, 4, 5))
            .with_description("An evening of live jazz on the lawn. Bring a blanket.")
            .with_time("19:30", Some("22:30"))
            .with_location("Lakeside Amphitheater, Austin, TX")
            .with_category("Music")
            .with_price(35)
            .with_image("/images/events/jazz-night.jpg")
            .with_organizer("Austin Jazz Society")
            .with_attendance(410, 500)
            .with_tags(["Live Music", "Jazz", "Outdoors"]),
        Event::new(4, "Startup Pitch Night", date(2025, 4, 12))
            .with_description("Ten early-stage founders pitch to a panel of local investors.")
            .with_time("18:00", None)
            .with_location("The Foundry, Denver, CO")
            .with_category("Business")
            .with_price(15)
            .with_organizer("Front Range Founders")
            .with_attendance(95, 150)
            .with_tags(["Startups", "Investing", "Networking"])
            .with_community(7, "Denver Founders Circle"),
        Event::new(5, "Morning Trail Run", date(2025, 4, 19))
            .with_description("A social 8k through the foothills, all paces welcome.")
            .with_time("07:00", Some("09:00"))
            .with_location("Chautauqua Trailhead, Boulder, CO")
            .with_category("Sports")
            .with_organizer("Boulder Trail Runners")
            .with_attendance(48, 80)
            .with_tags(["Running", "Fitness", "Outdoors"]),
        Event::new(6, "Watercolor Basics Workshop", date(2025, 5, 3))
            .with_description("Materials provided. Learn washes, layering, and color mixing.")
            .with_time("13:00", Some("16:00"))
            .with_location("Eastside Arts Studio, Seattle, WA")
            .with_category("Arts")
            .with_price(45)
            .with_organizer("Eastside Arts")
            .with_attendance(12, 16)
            .with_tags(["Painting", "Workshop"]),
    ]
}
