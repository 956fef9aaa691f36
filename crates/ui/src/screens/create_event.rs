//! Create-event form state.

use events::EventDraft;
use platform::Services;

use super::Effect;
use crate::error::NavError;
use crate::field::{set_text, text, Text};

/// Editable fields of the form. Category is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateEventField {
    /// "Título del evento".
    Title,
    /// "Descripción".
    Description,
    /// "Fecha".
    Date,
    /// "Hora".
    Time,
    /// "Ubicación".
    Location,
    /// "Max. asistentes".
    MaxAttendees,
}

/// User input on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateEventAction {
    /// A field changed.
    Edit(CreateEventField, String),
    /// "Crear Evento".
    Submit,
    /// Top-bar back arrow.
    Back,
}

/// State for the create-event form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEventState {
    /// Event title.
    pub title: Text<96>,
    /// Description paragraph.
    pub description: Text<512>,
    /// `dd/mm/yyyy`.
    pub date: Text<10>,
    /// `hh:mm`.
    pub time: Text<5>,
    /// Venue.
    pub location: Text<96>,
    /// Category (read-only).
    pub category: Text<32>,
    /// Attendance cap.
    pub max_attendees: Text<6>,
    /// Message from the last failed submit.
    pub error: Option<String>,
}

impl Default for CreateEventState {
    fn default() -> Self {
        let d = EventDraft::default();
        CreateEventState {
            title: text(&d.title),
            description: text(&d.description),
            date: text(&d.date),
            time: text(&d.time),
            location: text(&d.location),
            category: text(&d.category),
            max_attendees: text(&d.max_attendees),
            error: None,
        }
    }
}

impl CreateEventState {
    /// The form contents as a draft.
    #[must_use]
    pub fn draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.as_str().to_owned(),
            description: self.description.as_str().to_owned(),
            date: self.date.as_str().to_owned(),
            time: self.time.as_str().to_owned(),
            location: self.location.as_str().to_owned(),
            category: self.category.as_str().to_owned(),
            max_attendees: self.max_attendees.as_str().to_owned(),
        }
    }

    /// Apply `action`; submit hands the draft to the event store and pops.
    pub fn handle(
        &mut self,
        action: CreateEventAction,
        services: &mut Services,
    ) -> Result<Effect, NavError> {
        match action {
            CreateEventAction::Edit(field, v) => {
                match field {
                    CreateEventField::Title => set_text(&mut self.title, &v),
                    CreateEventField::Description => set_text(&mut self.description, &v),
                    CreateEventField::Date => set_text(&mut self.date, &v),
                    CreateEventField::Time => set_text(&mut self.time, &v),
                    CreateEventField::Location => set_text(&mut self.location, &v),
                    CreateEventField::MaxAttendees => set_text(&mut self.max_attendees, &v),
                }
                Ok(Effect::Stay)
            }
            CreateEventAction::Submit => match services.events.create(self.draft()) {
                Ok(()) => {
                    tracing::info!(title = %self.title, "event submitted");
                    Ok(Effect::Back)
                }
                Err(err) => {
                    tracing::warn!(%err, "event rejected");
                    self.error = Some(err.to_string());
                    Err(err.into())
                }
            },
            CreateEventAction::Back => Ok(Effect::Back),
        }
    }
}
