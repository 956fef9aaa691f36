//! App shell: navigator + visible screen + collaborators.
//!
//! Every action is routed to the visible screen. When the resulting effect
//! changes the stack, the state of the new top route is built from scratch;
//! nothing a screen held survives navigation.

use platform::Services;

use crate::error::NavError;
use crate::navigation::Navigator;
use crate::route::{Route, RouteKind};
use crate::screens::{
    CreateEventAction, CreateEventState, DashboardAction, DashboardState, Effect,
    EventDetailAction, EventDetailState, LoginAction, LoginState, ProfileAction, ProfileState,
    RegisterAction, RegisterState, WelcomeAction, WelcomeState,
};

/// State of the visible screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    /// Landing screen.
    Welcome(WelcomeState),
    /// Sign-in form.
    Login(LoginState),
    /// Registration form.
    Register(RegisterState),
    /// Event list.
    Dashboard(DashboardState),
    /// One event.
    EventDetail(EventDetailState),
    /// New-event form.
    CreateEvent(CreateEventState),
    /// User profile.
    Profile(ProfileState),
}

impl ScreenState {
    /// Fresh state for `route`.
    pub fn for_route(route: &Route, services: &Services) -> Self {
        match route {
            Route::Welcome => ScreenState::Welcome(WelcomeState),
            Route::Login => ScreenState::Login(LoginState::default()),
            Route::Register => ScreenState::Register(RegisterState::default()),
            Route::Dashboard => ScreenState::Dashboard(DashboardState::load(services)),
            Route::EventDetail(id) => {
                ScreenState::EventDetail(EventDetailState::load(id, services))
            }
            Route::CreateEvent => ScreenState::CreateEvent(CreateEventState::default()),
            Route::Profile => ScreenState::Profile(ProfileState::load(services)),
        }
    }

    /// Destination this state renders.
    #[must_use]
    pub fn kind(&self) -> RouteKind {
        match self {
            ScreenState::Welcome(_) => RouteKind::Welcome,
            ScreenState::Login(_) => RouteKind::Login,
            ScreenState::Register(_) => RouteKind::Register,
            ScreenState::Dashboard(_) => RouteKind::Dashboard,
            ScreenState::EventDetail(_) => RouteKind::EventDetail,
            ScreenState::CreateEvent(_) => RouteKind::CreateEvent,
            ScreenState::Profile(_) => RouteKind::Profile,
        }
    }
}

/// An action addressed to one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Welcome screen input.
    Welcome(WelcomeAction),
    /// Login screen input.
    Login(LoginAction),
    /// Registration screen input.
    Register(RegisterAction),
    /// Dashboard input.
    Dashboard(DashboardAction),
    /// Detail screen input.
    EventDetail(EventDetailAction),
    /// Create-event form input.
    CreateEvent(CreateEventAction),
    /// Profile screen input.
    Profile(ProfileAction),
}

impl Action {
    /// Screen the action belongs to.
    #[must_use]
    pub fn target(&self) -> RouteKind {
        match self {
            Action::Welcome(_) => RouteKind::Welcome,
            Action::Login(_) => RouteKind::Login,
            Action::Register(_) => RouteKind::Register,
            Action::Dashboard(_) => RouteKind::Dashboard,
            Action::EventDetail(_) => RouteKind::EventDetail,
            Action::CreateEvent(_) => RouteKind::CreateEvent,
            Action::Profile(_) => RouteKind::Profile,
        }
    }
}

/// What a dispatch did to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Route visible before.
    pub from: Route,
    /// Route visible after.
    pub to: Route,
    /// Stack depth after.
    pub depth: usize,
    /// Whether the stack changed (and the screen state was rebuilt).
    pub navigated: bool,
}

/// The running application.
pub struct App {
    navigator: Navigator,
    screen: ScreenState,
    services: Services,
}

impl App {
    /// Start at `welcome`.
    pub fn new(services: Services) -> Self {
        let navigator = Navigator::new();
        let screen = ScreenState::for_route(navigator.current(), &services);
        App {
            navigator,
            screen,
            services,
        }
    }

    /// The visible route.
    #[must_use]
    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    /// State of the visible screen.
    #[must_use]
    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    /// The navigator.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The collaborators.
    pub fn services_mut(&mut self) -> &mut Services {
        &mut self.services
    }

    /// Route `action` to the visible screen and apply its effect.
    pub fn dispatch(&mut self, action: Action) -> Result<Transition, NavError> {
        let actual = self.screen.kind();
        let expected = action.target();
        let services = &mut self.services;
        let effect = match (&mut self.screen, action) {
            (ScreenState::Welcome(s), Action::Welcome(a)) => s.handle(a),
            (ScreenState::Login(s), Action::Login(a)) => s.handle(a, services)?,
            (ScreenState::Register(s), Action::Register(a)) => s.handle(a, services)?,
            (ScreenState::Dashboard(s), Action::Dashboard(a)) => s.handle(a, services)?,
            (ScreenState::EventDetail(s), Action::EventDetail(a)) => s.handle(a, services)?,
            (ScreenState::CreateEvent(s), Action::CreateEvent(a)) => s.handle(a, services)?,
            (ScreenState::Profile(s), Action::Profile(a)) => s.handle(a, services),
            _ => {
                tracing::warn!(%expected, %actual, "action for another screen");
                return Err(NavError::ScreenMismatch { expected, actual });
            }
        };
        self.apply(effect)
    }

    /// System back: pop the visible route (no-op at the root).
    pub fn back(&mut self) -> Transition {
        let from = self.navigator.current().clone();
        let depth = self.navigator.depth();
        self.navigator.back();
        self.settle(from, depth)
    }

    /// Push the route at `path`, as a deep link would.
    pub fn open(&mut self, path: &str) -> Result<Transition, NavError> {
        let from = self.navigator.current().clone();
        let depth = self.navigator.depth();
        self.navigator.navigate_to_path(path)?;
        Ok(self.settle(from, depth))
    }

    fn apply(&mut self, effect: Effect) -> Result<Transition, NavError> {
        let from = self.navigator.current().clone();
        let depth = self.navigator.depth();
        match effect {
            Effect::Stay => {}
            Effect::Push(route) => self.navigator.navigate(route),
            Effect::PushWith(route, options) => self.navigator.navigate_with(route, options),
            Effect::Back => {
                self.navigator.back();
            }
            Effect::Open(path) => {
                if let Err(err) = self.navigator.navigate_to_path(path) {
                    tracing::warn!(%err, "navigation refused");
                    return Err(err);
                }
            }
        }
        Ok(self.settle(from, depth))
    }

    fn settle(&mut self, from: Route, depth_before: usize) -> Transition {
        let to = self.navigator.current().clone();
        let depth = self.navigator.depth();
        let navigated = to != from || depth != depth_before;
        if navigated {
            self.screen = ScreenState::for_route(&to, &self.services);
            tracing::debug!(%from, %to, depth, "navigated");
        }
        Transition {
            from,
            to,
            depth,
            navigated,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Services::stub())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::DrawerItem;

    #[test]
    fn test_app_starts_on_welcome() {
        let app = App::default();
        assert_eq!(app.current_route(), &Route::Welcome);
        assert_eq!(app.screen().kind(), RouteKind::Welcome);
    }

    #[test]
    fn test_mismatched_action_rejected() {
        let mut app = App::default();
        let err = app
            .dispatch(Action::Dashboard(DashboardAction::CreateEvent))
            .unwrap_err();
        assert_eq!(
            err,
            NavError::ScreenMismatch {
                expected: RouteKind::Dashboard,
                actual: RouteKind::Welcome
            }
        );
        assert_eq!(app.current_route(), &Route::Welcome);
    }

    #[test]
    fn test_local_edit_does_not_navigate() {
        let mut app = App::default();
        app.dispatch(Action::Welcome(WelcomeAction::Login)).unwrap();
        let t = app
            .dispatch(Action::Login(LoginAction::EditEmail("a@udb.edu.sv".into())))
            .unwrap();
        assert!(!t.navigated);
        match app.screen() {
            ScreenState::Login(s) => assert_eq!(s.email.as_str(), "a@udb.edu.sv"),
            other => panic!("expected login, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_form_state_discarded_on_back() {
        let mut app = App::default();
        app.dispatch(Action::Welcome(WelcomeAction::Login)).unwrap();
        app.dispatch(Action::Login(LoginAction::EditEmail("x@y".into())))
            .unwrap();
        app.dispatch(Action::Login(LoginAction::Back)).unwrap();
        app.dispatch(Action::Welcome(WelcomeAction::Login)).unwrap();
        match app.screen() {
            ScreenState::Login(s) => assert!(s.email.is_empty()),
            other => panic!("expected login, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_drawer_closes_when_leaving() {
        let mut app = App::default();
        app.dispatch(Action::Welcome(WelcomeAction::ContinueWithoutAccount))
            .unwrap();
        app.dispatch(Action::Dashboard(DashboardAction::OpenDrawer))
            .unwrap();
        app.dispatch(Action::Dashboard(DashboardAction::Menu(DrawerItem::Profile)))
            .unwrap();
        app.dispatch(Action::Profile(ProfileAction::Back)).unwrap();
        match app.screen() {
            ScreenState::Dashboard(s) => assert!(!s.drawer_open),
            other => panic!("expected dashboard, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_system_back_at_root_reports_no_navigation() {
        let mut app = App::default();
        let t = app.back();
        assert!(!t.navigated);
        assert_eq!(t.depth, 1);
    }

    #[test]
    fn test_open_deep_link() {
        let mut app = App::default();
        let t = app.open("event_detail/3").unwrap();
        assert!(t.navigated);
        match app.screen() {
            ScreenState::EventDetail(s) => assert_eq!(s.detail.organizer, "Departamento de Deportes"),
            other => panic!("expected detail, got {:?}", other.kind()),
        }
    }
}
