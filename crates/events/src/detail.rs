//! EventDetail: the full record shown on the event-detail screen.

use serde::{Deserialize, Serialize};

/// Title of the record returned for unknown identifiers.
pub const NOT_FOUND_TITLE: &str = "Evento no encontrado";

/// Display fields of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    /// Event title.
    pub title: String,
    /// Emoji drawn in the header banner.
    pub emoji: String,
    /// Long-form date ("Viernes, 25 Mayo").
    pub date: String,
    /// Time range ("2:00 PM - 6:00 PM").
    pub time: String,
    /// Venue.
    pub location: String,
    /// Address or building within the venue.
    pub address: String,
    /// Confirmed attendee count, as text.
    pub attendees: String,
    /// Description paragraph.
    pub description: String,
    /// Organizing group.
    pub organizer: String,
    /// Initials shown in the organizer avatar.
    pub organizer_initials: String,
}

impl EventDetail {
    /// The record rendered when an identifier has no entry.
    #[must_use]
    pub fn placeholder() -> Self {
        EventDetail {
            title: NOT_FOUND_TITLE.to_owned(),
            emoji: "❓".to_owned(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            address: String::new(),
            attendees: "0".to_owned(),
            description: String::new(),
            organizer: String::new(),
            organizer_initials: "?".to_owned(),
        }
    }

    /// Returns `true` for the not-found placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.title == NOT_FOUND_TITLE
    }

    /// "{n} asistentes confirmados".
    #[must_use]
    pub fn attendees_line(&self) -> String {
        format!("{} asistentes confirmados", self.attendees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_fields() {
        let p = EventDetail::placeholder();
        assert_eq!(p.title, "Evento no encontrado");
        assert_eq!(p.emoji, "❓");
        assert_eq!(p.attendees, "0");
        assert_eq!(p.organizer_initials, "?");
        assert!(p.organizer.is_empty());
        assert!(p.is_placeholder());
    }

    #[test]
    fn test_attendees_line() {
        let mut p = EventDetail::placeholder();
        p.attendees = "45".to_owned();
        assert_eq!(p.attendees_line(), "45 asistentes confirmados");
    }
}
