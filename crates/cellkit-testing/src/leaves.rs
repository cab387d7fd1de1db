//! Leaf views with deterministic measurement.

use cellkit_foundation::{ItemView, ViewHandle};
use cellkit_ui_graphics::{Color, Size};

/// Advance of every glyph laid out by [`TextView`].
pub const GLYPH_WIDTH: f32 = 8.0;

/// Height of one line of [`TextView`] text.
pub const LINE_HEIGHT: f32 = 16.0;

/// Monospaced text that wraps at the constraining width.
///
/// Each character advances [`GLYPH_WIDTH`]; a line is [`LINE_HEIGHT`] tall.
/// Wrapping breaks between glyphs and never produces a line narrower than
/// one glyph. Empty text has no intrinsic size.
#[derive(Debug, Clone)]
pub struct TextView {
    view: ViewHandle,
    text: String,
}

impl TextView {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            view: ViewHandle::new(),
            text: text.into(),
        }
    }

    pub fn with_background(self, color: Color) -> Self {
        self.view.set_background_color(color);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn glyph_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl ItemView for TextView {
    fn view(&self) -> &ViewHandle {
        &self.view
    }

    fn size_that_fits(&self, constraint: Size) -> Size {
        let glyphs = self.glyph_count();
        if glyphs == 0 {
            return Size::ZERO;
        }
        let natural_width = glyphs as f32 * GLYPH_WIDTH;
        if constraint.width <= 0.0 || natural_width <= constraint.width {
            return Size::new(natural_width, LINE_HEIGHT);
        }
        let per_line = ((constraint.width / GLYPH_WIDTH).floor() as usize).max(1);
        let lines = glyphs.div_ceil(per_line);
        Size::new(per_line as f32 * GLYPH_WIDTH, lines as f32 * LINE_HEIGHT)
    }
}

/// A view that always measures at the same natural size.
#[derive(Debug, Clone)]
pub struct IntrinsicView {
    view: ViewHandle,
    natural_size: Size,
}

impl IntrinsicView {
    pub fn new(natural_size: Size) -> Self {
        Self {
            view: ViewHandle::new(),
            natural_size,
        }
    }

    pub fn with_background(self, color: Color) -> Self {
        self.view.set_background_color(color);
        self
    }

    pub fn natural_size(&self) -> Size {
        self.natural_size
    }
}

impl ItemView for IntrinsicView {
    fn view(&self) -> &ViewHandle {
        &self.view
    }

    fn size_that_fits(&self, _constraint: Size) -> Size {
        self.natural_size
    }
}

#[cfg(test)]
#[path = "tests/leaves_tests.rs"]
mod tests;
