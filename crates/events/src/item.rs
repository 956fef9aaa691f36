//! EventItem: one entry of the dashboard's upcoming-events list.

use serde::{Deserialize, Serialize};

use crate::id::EventId;

/// Status shown on a card when none is given.
pub const DEFAULT_STATUS: &str = "Activo";

fn default_status() -> String {
    DEFAULT_STATUS.to_owned()
}

/// A single event as shown on a dashboard card.
///
/// Date and attendee count are free text ("25 May - 2:00 PM", "8 equipos").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventItem {
    /// Identifier passed to the detail route.
    pub id: EventId,
    /// Full title.
    pub title: String,
    /// Human-readable date and time.
    pub date: String,
    /// Venue.
    pub location: String,
    /// Attendance summary.
    pub attendees: String,
    /// Emoji marker drawn on the card banner.
    pub emoji: String,
    /// Category tag ("Cultural", "Académico", "Deportes", ...).
    pub category: String,
    /// Publication status.
    #[serde(default = "default_status")]
    pub status: String,
}

impl EventItem {
    /// Create an item with the default `"Activo"` status.
    pub fn new(
        id: EventId,
        title: &str,
        date: &str,
        location: &str,
        attendees: &str,
        emoji: &str,
        category: &str,
    ) -> Self {
        EventItem {
            id,
            title: title.to_owned(),
            date: date.to_owned(),
            location: location.to_owned(),
            attendees: attendees.to_owned(),
            emoji: emoji.to_owned(),
            category: category.to_owned(),
            status: default_status(),
        }
    }

    /// Card banner text: the emoji followed by the first two words of the title.
    #[must_use]
    pub fn card_heading(&self) -> String {
        let short: Vec<&str> = self.title.split(' ').take(2).collect();
        format!("{} {}", self.emoji, short.join(" "))
    }

    /// Case-insensitive match of `query` against title, location and category.
    ///
    /// A blank query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.title, &self.location, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
