//! Flow layout settings consumed by host surfaces.

use crate::ScrollDirection;
use cellkit_ui_graphics::EdgeInsets;

/// Placement rules for a line-based flow of items.
///
/// `interitem_spacing` separates items inside one line; `line_spacing`
/// separates consecutive lines. Lines run across the scroll direction.
/// With `one_item_per_line` set every item starts a new line, which turns
/// the flow into a single strip along the scroll direction.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FlowLayout {
    pub interitem_spacing: f32,
    pub line_spacing: f32,
    pub scroll_direction: ScrollDirection,
    pub section_inset: EdgeInsets,
    pub one_item_per_line: bool,
}

impl FlowLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interitem_spacing(mut self, spacing: f32) -> Self {
        self.interitem_spacing = spacing;
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn scroll_direction(mut self, direction: ScrollDirection) -> Self {
        self.scroll_direction = direction;
        self
    }

    pub fn section_inset(mut self, inset: EdgeInsets) -> Self {
        self.section_inset = inset;
        self
    }

    pub fn one_item_per_line(mut self, enabled: bool) -> Self {
        self.one_item_per_line = enabled;
        self
    }
}
