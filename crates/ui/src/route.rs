//! Route identifiers: every destination the navigator can push onto its stack.
//!
//! Routes round-trip through path strings of the form `login` or
//! `event_detail/2`.

use core::fmt;
use core::str::FromStr;

use events::EventId;

use crate::error::NavError;

/// A destination without its parameters; used to match stack entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Landing screen.
    Welcome,
    /// Email/password sign-in.
    Login,
    /// Account creation.
    Register,
    /// Upcoming-events list.
    Dashboard,
    /// One event's detail page.
    EventDetail,
    /// New-event form.
    CreateEvent,
    /// Signed-in user's profile.
    Profile,
}

impl RouteKind {
    /// Every registered destination.
    pub const ALL: [RouteKind; 7] = [
        RouteKind::Welcome,
        RouteKind::Login,
        RouteKind::Register,
        RouteKind::Dashboard,
        RouteKind::EventDetail,
        RouteKind::CreateEvent,
        RouteKind::Profile,
    ];

    /// First path segment.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RouteKind::Welcome => "welcome",
            RouteKind::Login => "login",
            RouteKind::Register => "register",
            RouteKind::Dashboard => "dashboard",
            RouteKind::EventDetail => "event_detail",
            RouteKind::CreateEvent => "create_event",
            RouteKind::Profile => "profile",
        }
    }

    /// Registered path pattern, parameters in braces.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            RouteKind::EventDetail => "event_detail/{eventId}",
            other => other.name(),
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A destination with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing screen.
    Welcome,
    /// Email/password sign-in.
    Login,
    /// Account creation.
    Register,
    /// Upcoming-events list.
    Dashboard,
    /// One event's detail page.
    EventDetail(EventId),
    /// New-event form.
    CreateEvent,
    /// Signed-in user's profile.
    Profile,
}

impl Route {
    /// The parameterless destination.
    #[must_use]
    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Welcome => RouteKind::Welcome,
            Route::Login => RouteKind::Login,
            Route::Register => RouteKind::Register,
            Route::Dashboard => RouteKind::Dashboard,
            Route::EventDetail(_) => RouteKind::EventDetail,
            Route::CreateEvent => RouteKind::CreateEvent,
            Route::Profile => RouteKind::Profile,
        }
    }

    /// Detail route for a raw id; missing or malformed ids become `"1"`.
    #[must_use]
    pub fn event_detail(raw_id: Option<&str>) -> Self {
        Route::EventDetail(EventId::parse_or_default(raw_id))
    }

    /// Parse a path such as `dashboard` or `event_detail/3`.
    pub fn parse(path: &str) -> Result<Self, NavError> {
        let (name, param) = match path.split_once('/') {
            Some((name, rest)) => (name, Some(rest)),
            None => (path, None),
        };
        let unknown = || NavError::UnknownRoute(path.to_owned());
        let kind = RouteKind::from_name(name).ok_or_else(unknown)?;
        let route = match kind {
            RouteKind::EventDetail => Route::event_detail(param),
            // Only the detail route takes a parameter.
            _ if param.is_some() => return Err(unknown()),
            RouteKind::Welcome => Route::Welcome,
            RouteKind::Login => Route::Login,
            RouteKind::Register => Route::Register,
            RouteKind::Dashboard => Route::Dashboard,
            RouteKind::CreateEvent => Route::CreateEvent,
            RouteKind::Profile => Route::Profile,
        };
        Ok(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::EventDetail(id) => write!(f, "event_detail/{id}"),
            other => f.write_str(other.kind().name()),
        }
    }
}

impl FromStr for Route {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_routes() {
        assert_eq!(Route::parse("welcome"), Ok(Route::Welcome));
        assert_eq!(Route::parse("create_event"), Ok(Route::CreateEvent));
        assert_eq!(Route::parse("profile"), Ok(Route::Profile));
    }

    #[test]
    fn test_parse_event_detail_with_id() {
        let route = Route::parse("event_detail/2").unwrap();
        assert_eq!(route, Route::event_detail(Some("2")));
        assert_eq!(route.kind(), RouteKind::EventDetail);
    }

    #[test]
    fn test_event_detail_missing_id_defaults_to_one() {
        assert_eq!(Route::parse("event_detail"), Ok(Route::event_detail(Some("1"))));
        assert_eq!(Route::parse("event_detail/"), Ok(Route::event_detail(Some("1"))));
    }

    #[test]
    fn test_event_detail_malformed_id_defaults_to_one() {
        assert_eq!(
            Route::parse("event_detail/1/2"),
            Ok(Route::event_detail(Some("1")))
        );
        assert_eq!(
            Route::parse("event_detail/a b"),
            Ok(Route::event_detail(Some("1")))
        );
    }

    #[test]
    fn test_unknown_route_rejected() {
        assert_eq!(
            Route::parse("settings"),
            Err(NavError::UnknownRoute("settings".to_owned()))
        );
    }

    #[test]
    fn test_param_on_plain_route_rejected() {
        assert!(Route::parse("login/3").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for path in ["welcome", "login", "register", "dashboard", "event_detail/3"] {
            assert_eq!(Route::parse(path).unwrap().to_string(), path);
        }
    }

    #[test]
    fn test_pattern_names_parameter() {
        assert_eq!(RouteKind::EventDetail.pattern(), "event_detail/{eventId}");
        assert_eq!(RouteKind::Login.pattern(), "login");
    }
}
