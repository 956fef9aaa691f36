//! Event storage abstraction

use events::{EventDetail, EventDraft, EventId, EventItem};
use thiserror::Error;

/// Storage failures a real backend reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend refused the write (validation, permissions).
    #[error("rejected: {0}")]
    Rejected(String),
    /// The backend could not be reached.
    #[error("event storage unavailable: {0}")]
    Unavailable(String),
}

/// Event listing, lookup and creation.
pub trait EventStore {
    /// Upcoming events in display order.
    fn list(&self) -> Vec<EventItem>;

    /// Detail record for `id`; unknown ids yield the placeholder record.
    fn detail(&self, id: &EventId) -> EventDetail;

    /// Persist a new event.
    fn create(&mut self, draft: EventDraft) -> Result<(), StoreError>;
}
