//! Login screen state: email, password and the visibility toggle.

use platform::{Credentials, Services};

use super::{enter_dashboard, Effect};
use crate::error::NavError;
use crate::field::{masked, set_text, Text};
use crate::route::Route;

/// Capacity of the email field in bytes.
pub const EMAIL_CAPACITY: usize = 64;
/// Capacity of the password field in bytes.
pub const PASSWORD_CAPACITY: usize = 64;

/// User input on the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    /// Email field changed.
    EditEmail(String),
    /// Password field changed.
    EditPassword(String),
    /// Eye icon on the password field.
    TogglePasswordVisibility,
    /// "Iniciar Sesión".
    Submit,
    /// "Continuar con Google".
    ContinueWithGoogle,
    /// "Regístrate".
    GoToRegister,
    /// Top-bar back arrow.
    Back,
}

/// State for the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    /// Email as typed.
    pub email: Text<EMAIL_CAPACITY>,
    /// Password as typed.
    pub password: Text<PASSWORD_CAPACITY>,
    /// Whether the password is shown in clear.
    pub password_visible: bool,
    /// Message from the last failed attempt.
    pub error: Option<String>,
}

impl LoginState {
    /// Password as it should be displayed.
    #[must_use]
    pub fn password_display(&self) -> String {
        if self.password_visible {
            self.password.as_str().to_owned()
        } else {
            masked(&self.password)
        }
    }

    /// Apply `action`, calling the auth backend on submit.
    pub fn handle(
        &mut self,
        action: LoginAction,
        services: &mut Services,
    ) -> Result<Effect, NavError> {
        match action {
            LoginAction::EditEmail(v) => set_text(&mut self.email, &v),
            LoginAction::EditPassword(v) => set_text(&mut self.password, &v),
            LoginAction::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible;
            }
            LoginAction::Submit => {
                let credentials = Credentials {
                    email: &self.email,
                    password: &self.password,
                };
                let result = services.auth.sign_in(&credentials);
                return self.finish(result.map(|s| s.email));
            }
            LoginAction::ContinueWithGoogle => {
                let result = services.auth.sign_in_with_google();
                return self.finish(result.map(|s| s.email));
            }
            LoginAction::GoToRegister => return Ok(Effect::Push(Route::Register)),
            LoginAction::Back => return Ok(Effect::Back),
        }
        Ok(Effect::Stay)
    }

    fn finish(&mut self, result: Result<String, platform::AuthError>) -> Result<Effect, NavError> {
        match result {
            Ok(email) => {
                tracing::info!(%email, "signed in");
                Ok(enter_dashboard())
            }
            Err(err) => {
                tracing::warn!(%err, "sign-in refused");
                self.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::RejectingAuth;
    use platform::AuthError;

    #[test]
    fn test_login_default_state() {
        let s = LoginState::default();
        assert!(s.email.is_empty());
        assert!(!s.password_visible);
        assert!(s.error.is_none());
    }

    #[test]
    fn test_password_masked_until_toggled() {
        let mut services = Services::stub();
        let mut s = LoginState::default();
        s.handle(LoginAction::EditPassword("secreto".into()), &mut services)
            .unwrap();
        assert_eq!(s.password_display(), "•••••••");
        s.handle(LoginAction::TogglePasswordVisibility, &mut services)
            .unwrap();
        assert_eq!(s.password_display(), "secreto");
    }

    #[test]
    fn test_submit_enters_dashboard() {
        let mut services = Services::stub();
        let mut s = LoginState::default();
        s.handle(LoginAction::EditEmail("alumno@udb.edu.sv".into()), &mut services)
            .unwrap();
        let effect = s.handle(LoginAction::Submit, &mut services).unwrap();
        assert_eq!(effect, enter_dashboard());
    }

    #[test]
    fn test_google_enters_dashboard() {
        let mut services = Services::stub();
        let mut s = LoginState::default();
        let effect = s
            .handle(LoginAction::ContinueWithGoogle, &mut services)
            .unwrap();
        assert_eq!(effect, enter_dashboard());
    }

    #[test]
    fn test_refused_sign_in_records_error() {
        let mut services = Services::stub();
        services.auth = Box::new(RejectingAuth::new(AuthError::InvalidCredentials));
        let mut s = LoginState::default();
        let err = s.handle(LoginAction::Submit, &mut services).unwrap_err();
        assert_eq!(err, NavError::Auth(AuthError::InvalidCredentials));
        assert_eq!(s.error.as_deref(), Some("invalid email or password"));
    }

    #[test]
    fn test_register_link_and_back() {
        let mut services = Services::stub();
        let mut s = LoginState::default();
        assert_eq!(
            s.handle(LoginAction::GoToRegister, &mut services).unwrap(),
            Effect::Push(Route::Register)
        );
        assert_eq!(s.handle(LoginAction::Back, &mut services).unwrap(), Effect::Back);
    }
}
