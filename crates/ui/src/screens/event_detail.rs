//! Event detail screen state.

use events::{EventDetail, EventId};
use platform::Services;

use super::Effect;
use crate::error::NavError;

/// User input on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDetailAction {
    /// "🎫 Asistir" / "🎫 Registrado".
    ToggleRegistration,
    /// "📤 Compartir".
    Share,
    /// Top-bar back arrow.
    Back,
}

/// State for the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetailState {
    /// Id from the route.
    pub id: EventId,
    /// Looked-up record (the placeholder for unknown ids).
    pub detail: EventDetail,
    /// Local registration flag; never persisted.
    pub registered: bool,
}

impl EventDetailState {
    /// Look up `id` in the event store.
    pub fn load(id: &EventId, services: &Services) -> Self {
        EventDetailState {
            id: id.clone(),
            detail: services.events.detail(id),
            registered: false,
        }
    }

    /// Registration button label.
    #[must_use]
    pub fn register_label(&self) -> &'static str {
        if self.registered {
            "🎫 Registrado"
        } else {
            "🎫 Asistir"
        }
    }

    /// Apply `action`.
    pub fn handle(
        &mut self,
        action: EventDetailAction,
        services: &mut Services,
    ) -> Result<Effect, NavError> {
        match action {
            EventDetailAction::ToggleRegistration => {
                let next = !self.registered;
                services.attendance.set_attending(&self.id, next)?;
                self.registered = next;
                Ok(Effect::Stay)
            }
            EventDetailAction::Share => {
                tracing::debug!(id = %self.id, "share requested; no share target");
                Ok(Effect::Stay)
            }
            EventDetailAction::Back => Ok(Effect::Back),
        }
    }
}
