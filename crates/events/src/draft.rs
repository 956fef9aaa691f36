//! EventDraft: what the create-event form hands to the event store.

use serde::{Deserialize, Serialize};

/// Category preselected on the form; the field is read-only.
pub const DEFAULT_CATEGORY: &str = "Académico";

/// A not-yet-persisted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Event title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Date in `dd/mm/yyyy`.
    pub date: String,
    /// Start time in `hh:mm`.
    pub time: String,
    /// Venue.
    pub location: String,
    /// Category tag.
    pub category: String,
    /// Attendance cap, as typed.
    pub max_attendees: String,
}

impl Default for EventDraft {
    fn default() -> Self {
        EventDraft {
            title: String::new(),
            description: String::new(),
            date: "25/05/2025".to_owned(),
            time: "02:00".to_owned(),
            location: String::new(),
            category: DEFAULT_CATEGORY.to_owned(),
            max_attendees: "100".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let d = EventDraft::default();
        assert_eq!(d.date, "25/05/2025");
        assert_eq!(d.time, "02:00");
        assert_eq!(d.category, "Académico");
        assert_eq!(d.max_attendees, "100");
        assert!(d.title.is_empty());
    }
}
