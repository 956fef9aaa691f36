//! ui-render - Screen Rendering Layer
//!
//! Draws every [`ui::ScreenState`] onto any `embedded-graphics`
//! `DrawTarget<Color = Gray4>`.
//!
//! # Component registration
//!
//! Render functions report each interactive element (id, type, bounds)
//! through a callback. [`Framebuffer::render`] collects those registrations
//! after drawing, which avoids borrowing the framebuffer twice, and keeps
//! them for assertions in tests.
//!
//! # Usage
//!
//! ```no_run
//! use ui::App;
//! use ui_render::Framebuffer;
//!
//! let app = App::default();
//! let mut fb = Framebuffer::phone();
//! fb.render(app.screen());
//! std::fs::write("welcome.pgm", fb.to_pgm()).unwrap();
//! ```

// Pixel geometry mixes u32 sizes and i32 points throughout; every value is
// bounded by the display size.
#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod components;
pub mod framebuffer;
pub mod screens;
pub mod theme;

pub use framebuffer::{ComponentRef, Framebuffer};
pub use screens::render_screen;
