//! EventId: the string identifier carried by the `event_detail/{eventId}` route.

use core::fmt;

use heapless::String;
use serde::{Deserialize, Serialize};

/// Maximum identifier length in bytes.
pub const MAX_ID_LEN: usize = 16;

/// Identifier used whenever the route parameter is missing or malformed.
pub const DEFAULT_EVENT_ID: &str = "1";

/// Identifier of a community event.
///
/// Always non-empty, at most [`MAX_ID_LEN`] bytes, and free of `/` and
/// whitespace so it can be embedded in a route path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "std::string::String", into = "std::string::String")]
pub struct EventId(String<MAX_ID_LEN>);

impl EventId {
    /// Parse `raw` into an identifier, or `None` when it is malformed.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.contains('/') || raw.chars().any(char::is_whitespace) {
            return None;
        }
        let mut id = String::new();
        id.push_str(raw).ok()?;
        Some(EventId(id))
    }

    /// Parse an optional route parameter, degrading to [`DEFAULT_EVENT_ID`].
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for EventId {
    fn default() -> Self {
        let mut id = String::new();
        // "1" is one byte; capacity is 16.
        id.push_str(DEFAULT_EVENT_ID).ok();
        EventId(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<std::string::String> for EventId {
    type Error = MalformedId;

    fn try_from(raw: std::string::String) -> Result<Self, Self::Error> {
        EventId::parse(&raw).ok_or(MalformedId)
    }
}

impl From<EventId> for std::string::String {
    fn from(id: EventId) -> Self {
        id.as_str().to_owned()
    }
}

/// Rejected identifier text (empty, too long, or containing `/` or whitespace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("malformed event id")]
pub struct MalformedId;

impl PartialEq<str> for EventId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for EventId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_id_is_one() {
        assert_eq!(EventId::default(), "1");
    }

    #[test]
    fn test_parse_plain_id() {
        let id = EventId::parse("2");
        assert_eq!(id.as_ref().map(EventId::as_str), Some("2"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(EventId::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_slash_and_whitespace() {
        assert!(EventId::parse("1/2").is_none());
        assert!(EventId::parse("a b").is_none());
    }

    #[test]
    fn test_parse_rejects_over_capacity() {
        let long = "x".repeat(MAX_ID_LEN + 1);
        assert!(EventId::parse(&long).is_none());
        let exact = "x".repeat(MAX_ID_LEN);
        assert!(EventId::parse(&exact).is_some());
    }

    #[test]
    fn test_missing_param_defaults() {
        assert_eq!(EventId::parse_or_default(None), "1");
        assert_eq!(EventId::parse_or_default(Some("")), "1");
        assert_eq!(EventId::parse_or_default(Some("3")), "3");
    }

    #[test]
    fn test_display_matches_as_str() {
        let id = EventId::parse_or_default(Some("42"));
        assert_eq!(id.to_string(), "42");
    }

    proptest! {
        #[test]
        fn prop_parse_or_default_never_yields_malformed(raw in ".{0,40}") {
            let id = EventId::parse_or_default(Some(&raw));
            prop_assert!(!id.as_str().is_empty());
            prop_assert!(id.as_str().len() <= MAX_ID_LEN);
            prop_assert!(!id.as_str().contains('/'));
        }

        #[test]
        fn prop_well_formed_ids_survive(raw in "[A-Za-z0-9_-]{1,16}") {
            let id = EventId::parse_or_default(Some(&raw));
            prop_assert_eq!(id.as_str(), raw.as_str());
        }
    }
}
