//! Errors surfaced by navigation and action dispatch.

use platform::{AuthError, StoreError};
use thiserror::Error;

use crate::route::RouteKind;

/// Why an action or navigation request was refused.
///
/// In every case the navigator and the visible screen's route are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The path names no registered route.
    #[error("no route named `{0}`")]
    UnknownRoute(String),
    /// An action for one screen arrived while another is visible.
    #[error("{expected} action dispatched while {actual} is shown")]
    ScreenMismatch {
        /// Screen the action belongs to.
        expected: RouteKind,
        /// Screen currently visible.
        actual: RouteKind,
    },
    /// The authentication backend refused the request.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The event or attendance backend refused the request.
    #[error(transparent)]
    Store(#[from] StoreError),
}
