//! Authentication abstraction

use thiserror::Error;

/// Email + password as typed on the login form.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    /// Account email.
    pub email: &'a str,
    /// Plain-text password.
    pub password: &'a str,
}

/// Fields of the registration form.
#[derive(Debug, Clone, Copy)]
pub struct Registration<'a> {
    /// Full name.
    pub name: &'a str,
    /// Account email.
    pub email: &'a str,
    /// Plain-text password.
    pub password: &'a str,
    /// Contact phone.
    pub phone: &'a str,
}

/// How a session was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    /// Email and password.
    Password,
    /// Google account.
    Google,
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Email the session belongs to (empty for providers that do not expose one).
    pub email: String,
    /// Provider that issued the session.
    pub provider: AuthProvider,
}

/// Authentication failures a real backend reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Wrong email or password.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Registration for an email that already has an account.
    #[error("an account already exists for {0}")]
    EmailTaken(String),
    /// The backend could not be reached.
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Authentication backend used by the login and registration screens.
pub trait AuthService {
    /// Sign in with email and password.
    fn sign_in(&mut self, credentials: &Credentials<'_>) -> Result<Session, AuthError>;

    /// Sign in through Google.
    fn sign_in_with_google(&mut self) -> Result<Session, AuthError>;

    /// Create an account and sign it in.
    fn register(&mut self, registration: &Registration<'_>) -> Result<Session, AuthError>;

    /// End the current session, if any.
    fn sign_out(&mut self);
}
