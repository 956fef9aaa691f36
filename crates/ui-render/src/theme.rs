//! Palette and fixed metrics.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::GrayColor;

/// Phone portrait width in pixels.
pub const SCREEN_WIDTH: u32 = 360;
/// Phone portrait height in pixels.
pub const SCREEN_HEIGHT: u32 = 640;

/// Height of the top app bar.
pub const TOP_BAR_HEIGHT: u32 = 56;
/// Outer margin.
pub const MARGIN: i32 = 16;

/// Brand blue, top bars and primary buttons.
pub const BRAND: Gray4 = Gray4::new(0x3);
/// Brand orange, banners and the create button.
pub const ACCENT: Gray4 = Gray4::new(0x9);
/// Secondary text.
pub const MUTED: Gray4 = Gray4::new(0x7);
/// Card and field outlines.
pub const OUTLINE: Gray4 = Gray4::new(0xB);
/// Card fill.
pub const SURFACE: Gray4 = Gray4::new(0xE);
/// Registered/disabled button fill.
pub const INACTIVE: Gray4 = Gray4::new(0x8);
/// Main text.
pub const INK: Gray4 = Gray4::BLACK;
/// Background and text on dark fills.
pub const PAPER: Gray4 = Gray4::WHITE;
