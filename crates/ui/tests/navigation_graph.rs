//! End-to-end walks through the navigation graph.
//!
//! Run: cargo test -p ui --test navigation_graph

use events::EventId;
use platform::Services;
use ui::screens::{
    CreateEventAction, DashboardAction, DrawerItem, EventDetailAction, LoginAction,
    ProfileAction, RegisterAction, WelcomeAction,
};
use ui::{Action, App, NavError, Route, RouteKind, ScreenState};

fn id(raw: &str) -> EventId {
    EventId::parse(raw).unwrap()
}

fn kinds(app: &App) -> Vec<RouteKind> {
    app.navigator()
        .back_stack()
        .iter()
        .map(Route::kind)
        .collect()
}

fn signed_in() -> App {
    let mut app = App::new(Services::stub());
    app.dispatch(Action::Welcome(WelcomeAction::Login)).unwrap();
    app.dispatch(Action::Login(LoginAction::Submit)).unwrap();
    app
}

fn guest() -> App {
    let mut app = App::new(Services::stub());
    app.dispatch(Action::Welcome(WelcomeAction::ContinueWithoutAccount))
        .unwrap();
    app
}

#[test]
fn welcome_buttons_reach_their_screens() {
    let cases = [
        (WelcomeAction::Login, Route::Login),
        (WelcomeAction::Register, Route::Register),
        (WelcomeAction::ContinueWithoutAccount, Route::Dashboard),
    ];
    for (action, expected) in cases {
        let mut app = App::default();
        let t = app.dispatch(Action::Welcome(action)).unwrap();
        assert_eq!(t.to, expected);
        assert_eq!(t.depth, 2);
    }
}

#[test]
fn login_lands_on_dashboard_without_welcome() {
    let mut app = signed_in();
    assert_eq!(app.current_route(), &Route::Dashboard);
    assert!(!app.navigator().contains(RouteKind::Welcome));
    // Back from the dashboard must not return to welcome.
    let t = app.back();
    assert!(!t.navigated);
    assert_eq!(app.current_route(), &Route::Dashboard);
}

#[test]
fn google_sign_in_behaves_like_login() {
    let mut app = App::default();
    app.dispatch(Action::Welcome(WelcomeAction::Login)).unwrap();
    app.dispatch(Action::Login(LoginAction::ContinueWithGoogle))
        .unwrap();
    assert_eq!(kinds(&app), [RouteKind::Dashboard]);
}

#[test]
fn registration_lands_on_dashboard_without_welcome() {
    let mut app = App::default();
    app.dispatch(Action::Welcome(WelcomeAction::Register)).unwrap();
    app.dispatch(Action::Register(RegisterAction::Submit)).unwrap();
    assert_eq!(kinds(&app), [RouteKind::Dashboard]);
}

#[test]
fn register_via_login_then_submit_clears_everything() {
    let mut app = App::default();
    app.dispatch(Action::Welcome(WelcomeAction::Login)).unwrap();
    app.dispatch(Action::Login(LoginAction::GoToRegister)).unwrap();
    assert_eq!(
        kinds(&app),
        [RouteKind::Welcome, RouteKind::Login, RouteKind::Register]
    );
    app.dispatch(Action::Register(RegisterAction::Submit)).unwrap();
    assert_eq!(kinds(&app), [RouteKind::Dashboard]);
}

#[test]
fn register_to_login_replaces_register() {
    let mut app = App::default();
    app.dispatch(Action::Welcome(WelcomeAction::Register)).unwrap();
    app.dispatch(Action::Register(RegisterAction::GoToLogin))
        .unwrap();
    assert_eq!(kinds(&app), [RouteKind::Welcome, RouteKind::Login]);
}

#[test]
fn register_to_login_keeps_earlier_login() {
    let mut app = App::default();
    app.dispatch(Action::Welcome(WelcomeAction::Login)).unwrap();
    app.dispatch(Action::Login(LoginAction::GoToRegister)).unwrap();
    app.dispatch(Action::Register(RegisterAction::GoToLogin))
        .unwrap();
    assert_eq!(
        kinds(&app),
        [RouteKind::Welcome, RouteKind::Login, RouteKind::Login]
    );
    // Back returns to the first login form, not to welcome.
    app.back();
    assert_eq!(kinds(&app), [RouteKind::Welcome, RouteKind::Login]);
}

#[test]
fn login_register_round_trips_add_one_login_each() {
    let mut app = App::default();
    app.dispatch(Action::Welcome(WelcomeAction::Login)).unwrap();
    for _ in 0..3 {
        app.dispatch(Action::Login(LoginAction::GoToRegister)).unwrap();
        app.dispatch(Action::Register(RegisterAction::GoToLogin))
            .unwrap();
    }
    assert_eq!(app.navigator().depth(), 5);
    assert!(!app.navigator().contains(RouteKind::Register));
    // Signing in still clears the whole welcome flow.
    app.dispatch(Action::Login(LoginAction::Submit)).unwrap();
    assert_eq!(kinds(&app), [RouteKind::Dashboard]);
}

#[test]
fn login_after_reopening_welcome_clears_both_welcomes() {
    let mut app = guest();
    app.open("welcome").unwrap();
    assert_eq!(
        kinds(&app),
        [RouteKind::Welcome, RouteKind::Dashboard, RouteKind::Welcome]
    );
    app.dispatch(Action::Welcome(WelcomeAction::Login)).unwrap();
    app.dispatch(Action::Login(LoginAction::Submit)).unwrap();
    assert_eq!(kinds(&app), [RouteKind::Dashboard]);
    assert!(!app.navigator().contains(RouteKind::Welcome));
}

#[test]
fn back_from_auth_forms_pops() {
    let mut app = App::default();
    app.dispatch(Action::Welcome(WelcomeAction::Register)).unwrap();
    app.dispatch(Action::Register(RegisterAction::Back)).unwrap();
    assert_eq!(app.current_route(), &Route::Welcome);
    app.dispatch(Action::Welcome(WelcomeAction::Login)).unwrap();
    app.dispatch(Action::Login(LoginAction::Back)).unwrap();
    assert_eq!(app.current_route(), &Route::Welcome);
}

#[test]
fn logout_from_dashboard_discards_stack() {
    for mut app in [signed_in(), guest()] {
        app.dispatch(Action::Dashboard(DashboardAction::Logout))
            .unwrap();
        assert_eq!(kinds(&app), [RouteKind::Welcome]);
        let t = app.back();
        assert!(!t.navigated);
        assert!(!app.navigator().contains(RouteKind::Dashboard));
    }
}

#[test]
fn logout_from_profile_discards_stack() {
    for mut app in [signed_in(), guest()] {
        app.dispatch(Action::Dashboard(DashboardAction::Menu(DrawerItem::Profile)))
            .unwrap();
        assert_eq!(app.current_route(), &Route::Profile);
        app.dispatch(Action::Profile(ProfileAction::Logout)).unwrap();
        assert_eq!(kinds(&app), [RouteKind::Welcome]);
    }
}

#[test]
fn event_two_shows_engineering_department() {
    let mut app = guest();
    app.dispatch(Action::Dashboard(DashboardAction::OpenEvent(id("2"))))
        .unwrap();
    assert_eq!(app.current_route(), &Route::event_detail(Some("2")));
    match app.screen() {
        ScreenState::EventDetail(s) => {
            assert_eq!(s.detail.organizer, "Departamento de Ingeniería");
        }
        other => panic!("expected detail, got {:?}", other.kind()),
    }
}

#[test]
fn unknown_event_shows_placeholder() {
    let mut app = guest();
    app.dispatch(Action::Dashboard(DashboardAction::OpenEvent(id("42"))))
        .unwrap();
    match app.screen() {
        ScreenState::EventDetail(s) => assert_eq!(s.detail.title, "Evento no encontrado"),
        other => panic!("expected detail, got {:?}", other.kind()),
    }
}

#[test]
fn detail_back_returns_to_dashboard() {
    let mut app = guest();
    app.dispatch(Action::Dashboard(DashboardAction::OpenEvent(id("1"))))
        .unwrap();
    app.dispatch(Action::EventDetail(EventDetailAction::Back))
        .unwrap();
    assert_eq!(app.current_route(), &Route::Dashboard);
}

#[test]
fn create_event_submit_and_back_pop() {
    let mut app = guest();
    for action in [CreateEventAction::Submit, CreateEventAction::Back] {
        app.dispatch(Action::Dashboard(DashboardAction::CreateEvent))
            .unwrap();
        assert_eq!(app.current_route(), &Route::CreateEvent);
        app.dispatch(Action::CreateEvent(action)).unwrap();
        assert_eq!(app.current_route(), &Route::Dashboard);
    }
    match app.screen() {
        ScreenState::Dashboard(s) => assert_eq!(s.cards.len(), 3),
        other => panic!("expected dashboard, got {:?}", other.kind()),
    }
}

#[test]
fn attend_toggle_is_not_persisted() {
    let mut app = guest();
    app.dispatch(Action::Dashboard(DashboardAction::ToggleAttend(id("3"))))
        .unwrap();
    match app.screen() {
        ScreenState::Dashboard(s) => {
            assert_eq!(s.card(&id("3")).unwrap().attend_label(), "Registrado");
        }
        other => panic!("expected dashboard, got {:?}", other.kind()),
    }

    // Leaving and returning rebuilds the dashboard.
    app.dispatch(Action::Dashboard(DashboardAction::CreateEvent))
        .unwrap();
    app.dispatch(Action::CreateEvent(CreateEventAction::Back))
        .unwrap();
    match app.screen() {
        ScreenState::Dashboard(s) => {
            assert_eq!(s.card(&id("3")).unwrap().attend_label(), "Asistir");
        }
        other => panic!("expected dashboard, got {:?}", other.kind()),
    }

    // A second launch starts unregistered too.
    let relaunched = guest();
    match relaunched.screen() {
        ScreenState::Dashboard(s) => assert!(s.cards.iter().all(|c| !c.registered)),
        other => panic!("expected dashboard, got {:?}", other.kind()),
    }
}

#[test]
fn profile_settings_is_unregistered() {
    let mut app = signed_in();
    app.dispatch(Action::Dashboard(DashboardAction::Menu(DrawerItem::Profile)))
        .unwrap();
    let depth = app.navigator().depth();
    let err = app
        .dispatch(Action::Profile(ProfileAction::OpenSettings))
        .unwrap_err();
    assert_eq!(err, NavError::UnknownRoute("settings".to_owned()));
    assert_eq!(app.current_route(), &Route::Profile);
    assert_eq!(app.navigator().depth(), depth);
}

#[test]
fn profile_back_returns_to_dashboard() {
    let mut app = guest();
    app.dispatch(Action::Dashboard(DashboardAction::Menu(DrawerItem::Profile)))
        .unwrap();
    app.dispatch(Action::Profile(ProfileAction::Back)).unwrap();
    assert_eq!(app.current_route(), &Route::Dashboard);
}
