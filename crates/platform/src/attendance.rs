//! Attendance registration abstraction

use events::EventId;

use crate::event_store::StoreError;

/// Records whether the user plans to attend an event.
pub trait AttendanceService {
    /// Mark the user as attending (`true`) or not attending `id`.
    fn set_attending(&mut self, id: &EventId, attending: bool) -> Result<(), StoreError>;
}
