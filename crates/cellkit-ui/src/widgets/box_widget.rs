//! Box component implementation

use cellkit_foundation::{Component, ComponentRef, ViewHandle};
use cellkit_ui_graphics::{EdgeInsets, Point};
use cellkit_ui_layout::ContentMode;

/// Wraps exactly one child with padding.
///
/// On every render the child is handed `Automatic(size - padding)`, whatever
/// mode it had before, with negative axes clamped to zero. The child is
/// placed at the leading padding and the box takes the child's preferred size
/// plus the padding.
pub struct BoxComponent {
    content_mode: ContentMode,
    container: ViewHandle,
    child: ComponentRef,
    padding: EdgeInsets,
}

impl BoxComponent {
    pub fn new(child: ComponentRef, padding: EdgeInsets, content_mode: ContentMode) -> Self {
        let container = ViewHandle::new();
        container.set_size(content_mode.size());
        Self {
            content_mode,
            container,
            child,
            padding,
        }
    }

    pub fn child(&self) -> &ComponentRef {
        &self.child
    }

    pub fn set_child(&mut self, child: ComponentRef) {
        self.child.borrow().view().remove_from_superview();
        self.child = child;
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: EdgeInsets) {
        self.padding = padding;
    }
}

impl Component for BoxComponent {
    fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    fn set_content_mode(&mut self, mode: ContentMode) {
        self.content_mode = mode;
    }

    fn render(&mut self) {
        let inset = self.content_mode.size().inset_by(self.padding);
        let estimate = inset.non_negative();
        if estimate != inset {
            log::trace!("box padding exceeds {inset:?}, clamping child estimate to {estimate:?}");
        }

        let mut child = self.child.borrow_mut();
        child.set_content_mode(ContentMode::automatic(estimate));
        child.render();

        let child_view = child.view();
        child_view.set_origin(Point::new(self.padding.left, self.padding.top));
        if !self.container.contains_subview(child_view) {
            self.container.add_subview(child_view);
        }
        self.container
            .set_size(child.preferred_content_size().outset_by(self.padding));
        self.container
            .set_background_color(child_view.background_color());
    }

    fn view(&self) -> &ViewHandle {
        &self.container
    }
}

#[cfg(test)]
#[path = "../tests/box_tests.rs"]
mod tests;
