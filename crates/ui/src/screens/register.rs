//! Registration screen state.

use platform::{Registration, Services};

use super::{enter_dashboard, Effect};
use crate::error::NavError;
use crate::field::{masked, set_text, Text};
use crate::navigation::NavOptions;
use crate::route::{Route, RouteKind};

/// Editable fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    /// "Nombre completo".
    Name,
    /// "Email".
    Email,
    /// "Contraseña".
    Password,
    /// "Teléfono".
    Phone,
}

/// User input on the registration screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterAction {
    /// A field changed.
    Edit(RegisterField, String),
    /// Eye icon on the password field.
    TogglePasswordVisibility,
    /// "Registrarse".
    Submit,
    /// "Inicia sesión".
    GoToLogin,
    /// Top-bar back arrow.
    Back,
}

/// State for the registration screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterState {
    /// Full name.
    pub name: Text<64>,
    /// Account email.
    pub email: Text<64>,
    /// Password as typed.
    pub password: Text<64>,
    /// Phone, `7xxx-xxxx`.
    pub phone: Text<16>,
    /// Whether the password is shown in clear.
    pub password_visible: bool,
    /// Message from the last failed attempt.
    pub error: Option<String>,
}

impl RegisterState {
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
        action: RegisterAction,
        services: &mut Services,
    ) -> Result<Effect, NavError> {
        match action {
            RegisterAction::Edit(field, v) => match field {
                RegisterField::Name => set_text(&mut self.name, &v),
                RegisterField::Email => set_text(&mut self.email, &v),
                RegisterField::Password => set_text(&mut self.password, &v),
                RegisterField::Phone => set_text(&mut self.phone, &v),
            },
            RegisterAction::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible;
            }
            RegisterAction::Submit => {
                let registration = Registration {
                    name: &self.name,
                    email: &self.email,
                    password: &self.password,
                    phone: &self.phone,
                };
                return match services.auth.register(&registration) {
                    Ok(session) => {
                        tracing::info!(email = %session.email, "account registered");
                        Ok(enter_dashboard())
                    }
                    Err(err) => {
                        tracing::warn!(%err, "registration refused");
                        self.error = Some(err.to_string());
                        Err(err.into())
                    }
                };
            }
            RegisterAction::GoToLogin => {
                return Ok(Effect::PushWith(
                    Route::Login,
                    NavOptions::pop_up_to(RouteKind::Register, true),
                ));
            }
            RegisterAction::Back => return Ok(Effect::Back),
        }
        Ok(Effect::Stay)
    }
}
