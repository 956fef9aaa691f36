//! Application UI layer: routes, navigation state, per-screen state and the app shell.
//!
//! Screens are headless: each is a state struct plus a closed action enum.
//! [`app::App`] owns the [`navigation::Navigator`], the state of the visible
//! screen and the collaborators, and turns actions into stack effects.

#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod app;
pub mod error;
pub mod field;
pub mod navigation;
pub mod route;
pub mod screens;

pub use app::{Action, App, ScreenState, Transition};
pub use error::NavError;
pub use navigation::{NavOptions, Navigator, PopUpTo};
pub use route::{Route, RouteKind};
