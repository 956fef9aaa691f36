//! EventCatalog: in-memory list of events plus the detail lookup table.
//!
//! Nothing here is persisted: a catalogue is built once (from the sample
//! data or a JSON list) and read from afterwards.

use std::collections::HashMap;

use thiserror::Error;

use crate::detail::EventDetail;
use crate::id::EventId;
use crate::item::EventItem;
use crate::sample;

/// Error type for catalogue construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON list could not be decoded.
    #[error("invalid event list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered list of [`EventItem`]s and the detail records keyed by id.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    items: Vec<EventItem>,
    details: HashMap<EventId, EventDetail>,
}

impl EventCatalog {
    /// The three demo events with their detail records.
    #[must_use]
    pub fn sample() -> Self {
        EventCatalog {
            items: sample::sample_items(),
            details: sample::sample_details().into_iter().collect(),
        }
    }

    /// Replace the list with a JSON array of [`EventItem`]s.
    ///
    /// The detail table stays the built-in one; ids without a record resolve
    /// to the placeholder.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<EventItem> = serde_json::from_str(json)?;
        Ok(EventCatalog {
            items,
            details: sample::sample_details().into_iter().collect(),
        })
    }

    /// All items in display order.
    #[must_use]
    pub fn items(&self) -> &[EventItem] {
        &self.items
    }

    /// Detail record for `id`, if the table has one.
    #[must_use]
    pub fn detail(&self, id: &EventId) -> Option<&EventDetail> {
        self.details.get(id)
    }

    /// Detail record for `id`, falling back to [`EventDetail::placeholder`].
    #[must_use]
    pub fn detail_or_placeholder(&self, id: &EventId) -> EventDetail {
        self.detail(id)
            .cloned()
            .unwrap_or_else(EventDetail::placeholder)
    }

    /// Number of list items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> EventId {
        EventId::parse_or_default(Some(raw))
    }

    #[test]
    fn test_sample_has_three_items_in_order() {
        let c = EventCatalog::sample();
        let ids: Vec<&str> = c.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_detail_lookup_known_ids() {
        let c = EventCatalog::sample();
        assert_eq!(c.detail_or_placeholder(&id("1")).organizer, "Club Cultural UDB");
        assert_eq!(
            c.detail_or_placeholder(&id("2")).organizer,
            "Departamento de Ingeniería"
        );
        assert_eq!(
            c.detail_or_placeholder(&id("3")).organizer,
            "Departamento de Deportes"
        );
    }

    #[test]
    fn test_unknown_id_yields_placeholder() {
        let c = EventCatalog::sample();
        assert!(c.detail(&id("99")).is_none());
        assert_eq!(c.detail_or_placeholder(&id("99")).title, "Evento no encontrado");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            EventCatalog::from_json("not json"),
            Err(CatalogError::Json(_))
        ));
    }
}
