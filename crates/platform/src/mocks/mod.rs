//! Stub implementations of every collaborator trait
//!
//! These back the application until a real service exists: authentication
//! accepts anything, events come from an in-memory catalogue, new events and
//! attendance marks are dropped. Each stub counts its calls so tests can
//! assert that a screen reached its collaborator.

use events::{EventCatalog, EventDetail, EventDraft, EventId, EventItem};

use crate::attendance::AttendanceService;
use crate::auth::{AuthError, AuthProvider, AuthService, Credentials, Registration, Session};
use crate::event_store::{EventStore, StoreError};
use crate::profile::{ProfileStore, UserProfile};

/// Authentication that succeeds for any input.
#[derive(Debug, Default)]
pub struct AcceptAllAuth {
    sign_ins: usize,
    registrations: usize,
    signed_in: bool,
}

impl AcceptAllAuth {
    /// Create a stub with no sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful sign-ins (password or Google).
    pub fn sign_ins(&self) -> usize {
        self.sign_ins
    }

    /// Number of accounts registered.
    pub fn registrations(&self) -> usize {
        self.registrations
    }

    /// Whether a session is currently open.
    pub fn signed_in(&self) -> bool {
        self.signed_in
    }

    fn open(&mut self, email: &str, provider: AuthProvider) -> Session {
        self.signed_in = true;
        tracing::debug!(email, ?provider, "stub auth: session opened");
        Session {
            email: email.to_owned(),
            provider,
        }
    }
}

impl AuthService for AcceptAllAuth {
    fn sign_in(&mut self, credentials: &Credentials<'_>) -> Result<Session, AuthError> {
        self.sign_ins = self.sign_ins.saturating_add(1);
        Ok(self.open(credentials.email, AuthProvider::Password))
    }

    fn sign_in_with_google(&mut self) -> Result<Session, AuthError> {
        self.sign_ins = self.sign_ins.saturating_add(1);
        Ok(self.open("", AuthProvider::Google))
    }

    fn register(&mut self, registration: &Registration<'_>) -> Result<Session, AuthError> {
        self.registrations = self.registrations.saturating_add(1);
        Ok(self.open(registration.email, AuthProvider::Password))
    }

    fn sign_out(&mut self) {
        self.signed_in = false;
    }
}

/// Authentication that refuses every attempt with a fixed error.
///
/// Used to exercise the error path of the login and registration screens.
#[derive(Debug, Clone)]
pub struct RejectingAuth {
    error: AuthError,
}

impl RejectingAuth {
    /// Reject every call with `error`.
    pub fn new(error: AuthError) -> Self {
        RejectingAuth { error }
    }
}

impl AuthService for RejectingAuth {
    fn sign_in(&mut self, _credentials: &Credentials<'_>) -> Result<Session, AuthError> {
        Err(self.error.clone())
    }

    fn sign_in_with_google(&mut self) -> Result<Session, AuthError> {
        Err(self.error.clone())
    }

    fn register(&mut self, _registration: &Registration<'_>) -> Result<Session, AuthError> {
        Err(self.error.clone())
    }

    fn sign_out(&mut self) {}
}

/// Event store serving a fixed catalogue; created drafts are dropped.
#[derive(Debug)]
pub struct SampleEventStore {
    catalog: EventCatalog,
    discarded: usize,
}

impl SampleEventStore {
    /// Serve `catalog`.
    pub fn new(catalog: EventCatalog) -> Self {
        SampleEventStore {
            catalog,
            discarded: 0,
        }
    }

    /// Number of drafts handed to [`EventStore::create`] so far.
    pub fn discarded(&self) -> usize {
        self.discarded
    }
}

impl Default for SampleEventStore {
    fn default() -> Self {
        Self::new(EventCatalog::sample())
    }
}

impl EventStore for SampleEventStore {
    fn list(&self) -> Vec<EventItem> {
        self.catalog.items().to_vec()
    }

    fn detail(&self, id: &EventId) -> EventDetail {
        self.catalog.detail_or_placeholder(id)
    }

    fn create(&mut self, draft: EventDraft) -> Result<(), StoreError> {
        self.discarded = self.discarded.saturating_add(1);
        tracing::debug!(title = %draft.title, "stub store: draft discarded");
        Ok(())
    }
}

/// Profile store returning the demo user.
#[derive(Debug, Clone)]
pub struct FixedProfile {
    profile: UserProfile,
}

impl FixedProfile {
    /// The demo user "Juan Pérez".
    pub fn new() -> Self {
        FixedProfile {
            profile: UserProfile {
                name: "Juan Pérez".to_owned(),
                email: "juan@udb.edu.sv".to_owned(),
                initials: "JP".to_owned(),
                events_attended: 5,
                events_created: 2,
                rating: 4.8,
            },
        }
    }
}

impl Default for FixedProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore for FixedProfile {
    fn current_user(&self) -> UserProfile {
        self.profile.clone()
    }
}

/// Attendance service that acknowledges and forgets.
#[derive(Debug, Default)]
pub struct ForgetfulAttendance {
    calls: usize,
}

impl ForgetfulAttendance {
    /// Create the stub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls received.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl AttendanceService for ForgetfulAttendance {
    fn set_attending(&mut self, id: &EventId, attending: bool) -> Result<(), StoreError> {
        self.calls = self.calls.saturating_add(1);
        tracing::debug!(%id, attending, "stub attendance: not persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all_auth_accepts_empty_form() {
        let mut auth = AcceptAllAuth::new();
        let session = auth
            .sign_in(&Credentials {
                email: "",
                password: "",
            })
            .unwrap();
        assert_eq!(session.provider, AuthProvider::Password);
        assert!(auth.signed_in());
        assert_eq!(auth.sign_ins(), 1);
    }

    #[test]
    fn test_accept_all_auth_google_and_sign_out() {
        let mut auth = AcceptAllAuth::new();
        let session = auth.sign_in_with_google().unwrap();
        assert_eq!(session.provider, AuthProvider::Google);
        auth.sign_out();
        assert!(!auth.signed_in());
    }

    #[test]
    fn test_accept_all_auth_register() {
        let mut auth = AcceptAllAuth::new();
        let session = auth
            .register(&Registration {
                name: "Ana",
                email: "ana@udb.edu.sv",
                password: "x",
                phone: "7000-0000",
            })
            .unwrap();
        assert_eq!(session.email, "ana@udb.edu.sv");
        assert_eq!(auth.registrations(), 1);
    }

    #[test]
    fn test_rejecting_auth_returns_configured_error() {
        let mut auth = RejectingAuth::new(AuthError::InvalidCredentials);
        assert_eq!(
            auth.sign_in_with_google(),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_sample_store_create_does_not_persist() {
        let mut store = SampleEventStore::default();
        let before = store.list().len();
        store.create(EventDraft::default()).unwrap();
        assert_eq!(store.list().len(), before);
        assert_eq!(store.discarded(), 1);
    }

    #[test]
    fn test_sample_store_detail_placeholder() {
        let store = SampleEventStore::default();
        let id = EventId::parse("404").unwrap();
        assert!(store.detail(&id).is_placeholder());
    }

    #[test]
    fn test_fixed_profile_fields() {
        let p = FixedProfile::new().current_user();
        assert_eq!(p.name, "Juan Pérez");
        assert_eq!(p.email, "juan@udb.edu.sv");
        assert_eq!(p.initials, "JP");
        assert_eq!(p.events_attended, 5);
        assert_eq!(p.events_created, 2);
    }

    #[test]
    fn test_forgetful_attendance_counts_calls() {
        let mut a = ForgetfulAttendance::new();
        let id = EventId::default();
        a.set_attending(&id, true).unwrap();
        a.set_attending(&id, false).unwrap();
        assert_eq!(a.calls(), 2);
    }
}
