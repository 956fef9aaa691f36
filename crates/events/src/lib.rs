//! Community events: identifiers, list items, detail records, drafts and the catalogue.
//!
//! # Modules
//!
//! - [`id`]: `EventId`, the route parameter that selects an event
//! - [`item`]: `EventItem`, one card in the dashboard list
//! - [`detail`]: `EventDetail` and the not-found placeholder
//! - [`draft`]: `EventDraft`, the create-event form payload
//! - [`catalog`]: `EventCatalog`, list + detail lookup
//! - [`sample`]: the built-in demo data

#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod catalog;
pub mod detail;
pub mod draft;
pub mod id;
pub mod item;
pub mod sample;

// Top-level re-exports for convenience
pub use catalog::{CatalogError, EventCatalog};
pub use detail::EventDetail;
pub use draft::EventDraft;
pub use id::{EventId, MalformedId};
pub use item::EventItem;
