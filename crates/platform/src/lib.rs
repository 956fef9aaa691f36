//! Collaborator abstractions for Eventos UDB
//!
//! The screens never talk to a backend directly; they go through the traits
//! defined here. Every trait has a stub implementation in [`mocks`] that
//! serves sample data and persists nothing.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (eventos binary)
//!         ↓
//! Feature Layers (ui, ui-render)
//!         ↓
//! Collaborators (this crate - trait abstractions + stubs)
//!         ↓
//! Data (events crate)
//! ```
//!
//! # Collaborators
//!
//! - [`AuthService`] - sign-in, Google sign-in, account registration
//! - [`EventStore`] - event listing, detail lookup, creation
//! - [`ProfileStore`] - the signed-in user's profile
//! - [`AttendanceService`] - "attend" registrations

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![warn(missing_docs)]
#![warn(clippy::print_stdout)] // prefer tracing over println! in lib code
#![allow(clippy::module_name_repetitions)]

pub mod attendance;
pub mod auth;
pub mod config;
pub mod event_store;
pub mod mocks;
pub mod profile;

pub use attendance::AttendanceService;
pub use auth::{AuthError, AuthProvider, AuthService, Credentials, Registration, Session};
pub use config::{AppConfig, ConfigError};
pub use event_store::{EventStore, StoreError};
pub use profile::{ProfileStore, UserProfile};

/// The full set of collaborators a running app talks to.
pub struct Services {
    /// Authentication backend.
    pub auth: Box<dyn AuthService>,
    /// Event listing and persistence.
    pub events: Box<dyn EventStore>,
    /// Signed-in user data.
    pub profiles: Box<dyn ProfileStore>,
    /// Attendance registrations.
    pub attendance: Box<dyn AttendanceService>,
}

impl Services {
    /// Stub collaborators over the built-in sample catalogue.
    pub fn stub() -> Self {
        Self::with_catalog(events::EventCatalog::sample())
    }

    /// Stub collaborators over `catalog`.
    pub fn with_catalog(catalog: events::EventCatalog) -> Self {
        Services {
            auth: Box::new(mocks::AcceptAllAuth::new()),
            events: Box::new(mocks::SampleEventStore::new(catalog)),
            profiles: Box::new(mocks::FixedProfile::new()),
            attendance: Box::new(mocks::ForgetfulAttendance::new()),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::stub()
    }
}
