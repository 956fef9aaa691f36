//! Per-screen state and actions.
//!
//! Each screen handles its own actions and answers with an [`Effect`]; the
//! app shell applies the effect to the navigator. Screen state lives only
//! while its route is visible.

pub mod create_event;
pub mod dashboard;
pub mod event_detail;
pub mod login;
pub mod profile;
pub mod register;
pub mod welcome;

pub use create_event::{CreateEventAction, CreateEventField, CreateEventState};
pub use dashboard::{DashboardAction, DashboardState, DrawerItem, EventCard};
pub use event_detail::{EventDetailAction, EventDetailState};
pub use login::{LoginAction, LoginState};
pub use profile::{ProfileAction, ProfileMenuItem, ProfileState};
pub use register::{RegisterAction, RegisterField, RegisterState};
pub use welcome::{WelcomeAction, WelcomeState};

use crate::navigation::NavOptions;
use crate::route::{Route, RouteKind};

/// What a screen asks the navigator to do after handling an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Stay on the current screen.
    Stay,
    /// Push a route.
    Push(Route),
    /// Push a route after adjusting the stack.
    PushWith(Route, NavOptions),
    /// Pop the current route.
    Back,
    /// Push a route given by path; fails for unregistered names.
    Open(&'static str),
}

/// Sign-in or registration succeeded: dashboard, with every `welcome`
/// entry and everything above it gone.
pub(crate) fn enter_dashboard() -> Effect {
    Effect::PushWith(
        Route::Dashboard,
        NavOptions::pop_up_to_oldest(RouteKind::Welcome, true),
    )
}

/// Logout: back to welcome, with the signed-in stack gone.
pub(crate) fn leave_to_welcome() -> Effect {
    Effect::PushWith(
        Route::Welcome,
        NavOptions::pop_up_to(RouteKind::Dashboard, true).single_top(),
    )
}
