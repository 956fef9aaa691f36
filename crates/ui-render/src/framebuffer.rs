//! Headless Gray4 framebuffer with a component registry.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use ui::ScreenState;

use crate::screens::render_screen;
use crate::theme::{PAPER, SCREEN_HEIGHT, SCREEN_WIDTH};

/// An interactive element drawn by the last render.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRef {
    /// Stable identifier, e.g. `"login-submit-btn"`.
    pub test_id: String,
    /// Broad category: `"Button"`, `"TextField"`, `"Card"`, `"Label"`.
    pub component_type: String,
    /// Top-left corner in display coordinates.
    pub position: (i32, i32),
    /// Width × height in pixels.
    pub size: (u32, u32),
}

impl ComponentRef {
    /// Bounding rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.position.0, self.position.1),
            Size::new(self.size.0, self.size.1),
        )
    }

    /// Centre of the bounding box.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// In-memory display.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Gray4>,
    components: Vec<ComponentRef>,
}

impl Framebuffer {
    /// Blank (white) framebuffer of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = usize::try_from(u64::from(width) * u64::from(height)).unwrap_or(0);
        Self {
            width,
            height,
            pixels: vec![PAPER; len],
            components: Vec::new(),
        }
    }

    /// Phone-portrait framebuffer.
    #[must_use]
    pub fn phone() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// Render `screen` over the whole frame, replacing the registry.
    pub fn render(&mut self, screen: &ScreenState) {
        self.clear_components();
        let mut regs: Vec<(String, String, (i32, i32), (u32, u32))> = Vec::new();
        render_screen(self, screen, |id, ty, pos, size| {
            regs.push((id.to_owned(), ty.to_owned(), pos, size));
        })
        .unwrap_or_else(|never| match never {});
        for (id, ty, pos, size) in regs {
            self.register_component(&id, &ty, pos, size);
        }
        tracing::trace!(screen = %screen.kind(), components = self.components.len(), "rendered");
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        usize::try_from(u64::from(y) * u64::from(self.width) + u64::from(x)).ok()
    }

    /// Colour at `(x, y)`, or `None` if out of bounds.
    #[must_use]
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Gray4> {
        self.index(x, y).and_then(|i| self.pixels.get(i)).copied()
    }

    /// Count pixels in `rect` whose luma matches `color`.
    #[must_use]
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: Gray4) -> usize {
        rect.points()
            .filter_map(|p| self.pixel_at(u32::try_from(p.x).ok()?, u32::try_from(p.y).ok()?))
            .filter(|c| c.luma() == color.luma())
            .count()
    }

    // ── Component registry ───────────────────────────────────────────────────

    /// Register (or update) a component by test ID.
    pub fn register_component(
        &mut self,
        test_id: &str,
        component_type: &str,
        position: (i32, i32),
        size: (u32, u32),
    ) {
        if let Some(existing) = self.components.iter_mut().find(|c| c.test_id == test_id) {
            existing.component_type = component_type.to_owned();
            existing.position = position;
            existing.size = size;
        } else {
            self.components.push(ComponentRef {
                test_id: test_id.to_owned(),
                component_type: component_type.to_owned(),
                position,
                size,
            });
        }
    }

    /// Remove all registered components.
    pub fn clear_components(&mut self) {
        self.components.clear();
    }

    /// Find a component by test ID.
    #[must_use]
    pub fn query_by_test_id(&self, test_id: &str) -> Option<&ComponentRef> {
        self.components.iter().find(|c| c.test_id == test_id)
    }

    /// Every registered component, in drawing order.
    #[must_use]
    pub fn components(&self) -> &[ComponentRef] {
        &self.components
    }

    /// Error unless a component with `test_id` was registered.
    pub fn assert_has_component(&self, test_id: &str) -> Result<(), String> {
        self.query_by_test_id(test_id)
            .ok_or_else(|| format!("Component '{test_id}' not found"))
            .map(|_| ())
    }

    /// Binary PGM (P5) image, 16 grey levels.
    #[must_use]
    pub fn to_pgm(&self) -> Vec<u8> {
        let mut out = format!("P5\n{} {}\n15\n", self.width, self.height).into_bytes();
        out.extend(self.pixels.iter().map(|c| c.luma()));
        out
    }
}

impl DrawTarget for Framebuffer {
    type Color = Gray4;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if let Some(slot) = self.index(x, y).and_then(|i| self.pixels.get_mut(i)) {
                *slot = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn test_new_is_white() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.pixel_at(3, 2), Some(Gray4::WHITE));
        assert_eq!(fb.pixel_at(4, 0), None);
    }

    #[test]
    fn test_draw_clips_out_of_bounds() {
        let mut fb = Framebuffer::new(10, 10);
        Rectangle::new(Point::new(-5, -5), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.pixel_at(0, 0), Some(Gray4::BLACK));
        assert_eq!(fb.pixel_at(2, 2), Some(Gray4::BLACK));
        assert_eq!(fb.pixel_at(3, 3), Some(Gray4::WHITE));
    }

    #[test]
    fn test_register_updates_existing() {
        let mut fb = Framebuffer::new(10, 10);
        fb.register_component("a", "Button", (0, 0), (5, 5));
        fb.register_component("a", "Label", (1, 1), (2, 2));
        assert_eq!(fb.components().len(), 1);
        assert_eq!(fb.query_by_test_id("a").unwrap().component_type, "Label");
        assert!(fb.assert_has_component("b").is_err());
    }

    #[test]
    fn test_pgm_header_and_length() {
        let fb = Framebuffer::new(3, 2);
        let pgm = fb.to_pgm();
        let header = b"P5\n3 2\n15\n";
        assert!(pgm.starts_with(header));
        assert_eq!(pgm.len(), header.len() + 6);
        assert!(pgm[header.len()..].iter().all(|&b| b == 15));
    }
}
