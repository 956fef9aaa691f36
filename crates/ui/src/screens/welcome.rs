//! Welcome screen: brand header and the three ways in.

use super::Effect;
use crate::route::Route;

/// Buttons on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeAction {
    /// "Iniciar Sesión".
    Login,
    /// "Registrarse".
    Register,
    /// "Continuar sin cuenta".
    ContinueWithoutAccount,
}

/// The welcome screen has no mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WelcomeState;

impl WelcomeState {
    /// Map a button to its destination.
    #[must_use]
    pub fn handle(&self, action: WelcomeAction) -> Effect {
        match action {
            WelcomeAction::Login => Effect::Push(Route::Login),
            WelcomeAction::Register => Effect::Push(Route::Register),
            WelcomeAction::ContinueWithoutAccount => Effect::Push(Route::Dashboard),
        }
    }
}
