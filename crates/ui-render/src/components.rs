//! Drawing primitives shared by every screen: buttons, labels, text fields.
//!
//! Each `render` returns the bounds it covered so callers can register the
//! element. Fonts are the ISO 8859-1 mono fonts so Spanish accents draw;
//! glyphs outside Latin-1 (emoji, bullets) fall back to the font's
//! replacement character.

use std::borrow::Cow;

use embedded_graphics::{
    mono_font::{
        iso_8859_1::{FONT_10X20, FONT_6X10},
        MonoTextStyle,
    },
    pixelcolor::Gray4,
    prelude::*,
    primitives::{CornerRadii, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Baseline, Text},
};

use crate::theme::{BRAND, INK, MUTED, OUTLINE, PAPER, SURFACE};

/// Text size variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSize {
    /// 6x10 font.
    Small,
    /// 10x20 font.
    Normal,
}

impl TextSize {
    /// Glyph height.
    #[must_use]
    pub fn line_height(self) -> u32 {
        match self {
            TextSize::Small => 10,
            TextSize::Normal => 20,
        }
    }

    /// Glyph advance.
    #[must_use]
    pub fn char_width(self) -> u32 {
        match self {
            TextSize::Small => 6,
            TextSize::Normal => 10,
        }
    }

    fn style(self, color: Gray4) -> MonoTextStyle<'static, Gray4> {
        match self {
            TextSize::Small => MonoTextStyle::new(&FONT_6X10, color),
            TextSize::Normal => MonoTextStyle::new(&FONT_10X20, color),
        }
    }
}

/// Cut `text` to `max_chars`, marking the cut with "...".
#[must_use]
pub fn fit(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    Cow::Owned(out)
}

/// Greedy word wrap to lines of at most `max_chars` characters. Words longer
/// than a line are cut.
#[must_use]
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&fit(word, max_chars));
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ─────────────────────────────────────────────────────────────────────────────
// Button
// ─────────────────────────────────────────────────────────────────────────────

/// Button style presets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonStyle {
    /// Fill colour.
    pub background: Gray4,
    /// Label colour.
    pub foreground: Gray4,
    /// Outline colour, if any.
    pub border: Option<Gray4>,
    /// Horizontal and vertical padding.
    pub padding: (u32, u32),
    /// Corner radius.
    pub corner_radius: u32,
}

impl ButtonStyle {
    /// Brand fill, white label.
    #[must_use]
    pub fn primary() -> Self {
        Self {
            background: BRAND,
            foreground: PAPER,
            border: None,
            padding: (16, 10),
            corner_radius: 8,
        }
    }

    /// White fill, brand outline and label.
    #[must_use]
    pub fn outlined() -> Self {
        Self {
            background: PAPER,
            foreground: BRAND,
            border: Some(BRAND),
            padding: (16, 10),
            corner_radius: 8,
        }
    }

    /// Label only.
    #[must_use]
    pub fn text() -> Self {
        Self {
            background: PAPER,
            foreground: BRAND,
            border: None,
            padding: (8, 4),
            corner_radius: 0,
        }
    }

    /// Same style on a different fill.
    #[must_use]
    pub fn filled(mut self, background: Gray4) -> Self {
        self.background = background;
        self
    }
}

/// Clickable button.
pub struct Button<'a> {
    label: &'a str,
    style: ButtonStyle,
    min_width: Option<u32>,
}

impl<'a> Button<'a> {
    /// Primary button with `label`.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: ButtonStyle::primary(),
            min_width: None,
        }
    }

    /// Set the style.
    #[must_use]
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Stretch to at least `width`.
    #[must_use]
    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Size including padding.
    #[must_use]
    pub fn size(&self) -> Size {
        let text_width = self.label.chars().count() as u32 * TextSize::Normal.char_width();
        let width = text_width + 2 * self.style.padding.0;
        let height = TextSize::Normal.line_height() + 2 * self.style.padding.1;
        Size::new(self.min_width.map_or(width, |min| width.max(min)), height)
    }

    /// Draw with the top-left corner at `position`.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<Rectangle, D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let size = self.size();
        let bounds = Rectangle::new(position, size);
        let radius = self.style.corner_radius;
        let shape = RoundedRectangle::new(bounds, CornerRadii::new(Size::new(radius, radius)));
        shape
            .into_styled(PrimitiveStyle::with_fill(self.style.background))
            .draw(display)?;
        if let Some(border) = self.style.border {
            shape
                .into_styled(PrimitiveStyle::with_stroke(border, 1))
                .draw(display)?;
        }

        let text_width = self.label.chars().count() as u32 * TextSize::Normal.char_width();
        let text_x = position.x + (size.width.saturating_sub(text_width) / 2) as i32;
        let text_y = position.y + self.style.padding.1 as i32;
        Text::with_baseline(
            self.label,
            Point::new(text_x, text_y),
            TextSize::Normal.style(self.style.foreground),
            Baseline::Top,
        )
        .draw(display)?;
        Ok(bounds)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Label
// ─────────────────────────────────────────────────────────────────────────────

/// Static text.
pub struct Label<'a> {
    text: &'a str,
    color: Gray4,
    size: TextSize,
}

impl<'a> Label<'a> {
    /// Normal-size black label.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            color: INK,
            size: TextSize::Normal,
        }
    }

    /// Small muted label.
    #[must_use]
    pub fn caption(text: &'a str) -> Self {
        Self::new(text).size(TextSize::Small).color(MUTED)
    }

    /// Set text colour.
    #[must_use]
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// Set text size.
    #[must_use]
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// Text extent.
    #[must_use]
    pub fn dimensions(&self) -> Size {
        Size::new(
            self.text.chars().count() as u32 * self.size.char_width(),
            self.size.line_height(),
        )
    }

    /// Draw with the top-left corner at `position`.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<Rectangle, D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        Text::with_baseline(self.text, position, self.size.style(self.color), Baseline::Top)
            .draw(display)?;
        Ok(Rectangle::new(position, self.dimensions()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TextField
// ─────────────────────────────────────────────────────────────────────────────

/// Outlined input box with a caption above it.
pub struct TextField<'a> {
    caption: &'a str,
    value: &'a str,
    placeholder: &'a str,
    width: u32,
    read_only: bool,
}

impl<'a> TextField<'a> {
    /// Height of the caption row.
    pub const CAPTION_HEIGHT: u32 = 14;
    /// Height of the input box.
    pub const BOX_HEIGHT: u32 = 36;

    /// Field captioned `caption` showing `value`.
    #[must_use]
    pub fn new(caption: &'a str, value: &'a str, width: u32) -> Self {
        Self {
            caption,
            value,
            placeholder: "",
            width,
            read_only: false,
        }
    }

    /// Grey text shown while the value is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Shade the box to show it cannot be edited.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Caption plus box.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, Self::CAPTION_HEIGHT + Self::BOX_HEIGHT)
    }

    /// Draw with the top-left corner at `position`. Returns the input box.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<Rectangle, D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        Label::caption(self.caption).render(display, position)?;

        let top_left = position + Point::new(0, Self::CAPTION_HEIGHT as i32);
        let input = Rectangle::new(top_left, Size::new(self.width, Self::BOX_HEIGHT));
        let shape = RoundedRectangle::new(input, CornerRadii::new(Size::new(4, 4)));
        let fill = if self.read_only { SURFACE } else { PAPER };
        shape
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(display)?;
        shape
            .into_styled(PrimitiveStyle::with_stroke(OUTLINE, 1))
            .draw(display)?;

        let (text, color) = if self.value.is_empty() {
            (self.placeholder, MUTED)
        } else {
            (self.value, INK)
        };
        let max_chars = (self.width.saturating_sub(16) / TextSize::Normal.char_width()) as usize;
        Label::new(&fit(text, max_chars))
            .color(color)
            .render(display, top_left + Point::new(8, 8))?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Framebuffer;

    #[test]
    fn test_fit_counts_chars_not_bytes() {
        assert_eq!(fit("Ingeniería", 10), "Ingeniería");
        assert_eq!(fit("Conferencia de IA", 10), "Confere...");
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("Únete a nosotros para una conferencia", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.first().map(String::as_str), Some("Únete a"));
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_button_min_width() {
        let b = Button::new("OK").min_width(200);
        assert_eq!(b.size(), Size::new(200, 40));
    }

    #[test]
    fn test_button_draws_fill() {
        let mut fb = Framebuffer::new(200, 60);
        let bounds = Button::new("Entrar").render(&mut fb, Point::new(10, 10)).unwrap();
        assert_eq!(bounds.top_left, Point::new(10, 10));
        let c = bounds.center();
        assert_ne!(fb.pixel_at(c.x as u32, (bounds.top_left.y + 2) as u32), Some(PAPER));
    }

    #[test]
    fn test_text_field_returns_input_box() {
        let mut fb = Framebuffer::new(200, 60);
        let input = TextField::new("Email", "", 180)
            .placeholder("alumno@udb.edu.sv")
            .render(&mut fb, Point::zero())
            .unwrap();
        assert_eq!(input.top_left, Point::new(0, 14));
        assert_eq!(input.size, Size::new(180, 36));
    }
}
