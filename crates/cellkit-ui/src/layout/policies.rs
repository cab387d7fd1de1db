use cellkit_foundation::{CollectionContext, Component, IndexPath, ItemLayoutPolicy};
use cellkit_ui_graphics::Size;
use cellkit_ui_layout::{ContentMode, ScrollDirection};

/// ItemLayoutPolicy for List rows - full width, natural height.
///
/// The size query injects the list width into the row's content mode, keeping
/// the variant and the height it carries, renders the row, and reports the
/// height the row ended up with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListRowPolicy;

impl ItemLayoutPolicy for ListRowPolicy {
    fn size_for_item(
        &mut self,
        context: &CollectionContext,
        _index_path: IndexPath,
        item: &mut dyn Component,
    ) -> Size {
        let width = context.bounds.width;
        item.set_content_mode(item.content_mode().with_width(width));
        item.render();
        Size::new(width, item.preferred_content_size().height)
    }
}

/// ItemLayoutPolicy for Grid cells - every item pinned to one cell size.
///
/// The owning grid recomputes `cell_size` once per render, before any item
/// is materialized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UniformCellPolicy {
    pub cell_size: Size,
}

impl UniformCellPolicy {
    pub fn new(cell_size: Size) -> Self {
        Self { cell_size }
    }
}

impl ItemLayoutPolicy for UniformCellPolicy {
    fn materialize(
        &mut self,
        _context: &CollectionContext,
        _index_path: IndexPath,
        item: &mut dyn Component,
    ) {
        item.set_content_mode(ContentMode::fixed(self.cell_size));
    }
}

/// ItemLayoutPolicy for Carousel items - stretched along the scroll axis.
///
/// A vertical carousel stretches each item's height to the visible height, a
/// horizontal one its width to the visible width. The other axis keeps the
/// size the item asked for, fixed or estimated. Items always end up `Fixed`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StretchPolicy {
    pub scroll_direction: ScrollDirection,
}

impl StretchPolicy {
    pub fn new(scroll_direction: ScrollDirection) -> Self {
        Self { scroll_direction }
    }

    pub fn stretched(&self, requested: Size, visible: Size) -> Size {
        match self.scroll_direction {
            ScrollDirection::Vertical => requested.with_height(visible.height),
            ScrollDirection::Horizontal => requested.with_width(visible.width),
        }
    }
}

impl ItemLayoutPolicy for StretchPolicy {
    fn materialize(
        &mut self,
        context: &CollectionContext,
        _index_path: IndexPath,
        item: &mut dyn Component,
    ) {
        let requested = item.content_mode().size();
        let size = self.stretched(requested, context.visible_rect.size());
        item.set_content_mode(ContentMode::fixed(size));
    }
}

#[cfg(test)]
#[path = "tests/policies_tests.rs"]
mod tests;
