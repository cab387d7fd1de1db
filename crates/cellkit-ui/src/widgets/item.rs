//! Item component implementation

use cellkit_foundation::{Component, ItemView, ViewHandle};
use cellkit_ui_graphics::Size;
use cellkit_ui_layout::ContentMode;

/// A leaf component hosting one piece of content.
///
/// Under `Fixed` the container and the content are pinned to the fixed
/// size. Under `Automatic` the content measures itself within the estimate
/// and the item adopts that natural size; on an axis where the content
/// measures zero the estimate is used instead, so content without an
/// intrinsic size still fills the space it was offered.
///
/// The container mirrors the content's background color.
#[derive(Debug)]
pub struct ItemComponent<V: ItemView> {
    content_mode: ContentMode,
    container: ViewHandle,
    content: V,
}

impl<V: ItemView> ItemComponent<V> {
    pub fn new(content: V, content_mode: ContentMode) -> Self {
        let container = ViewHandle::new();
        container.set_size(content_mode.size());
        Self {
            content_mode,
            container,
            content,
        }
    }

    pub fn content(&self) -> &V {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut V {
        &mut self.content
    }

    fn measure(&self) -> Size {
        match self.content_mode {
            ContentMode::Fixed { size } => size,
            ContentMode::Automatic { estimated_size } => {
                let natural = self.content.size_that_fits(estimated_size);
                fall_back_on_zero_axes(natural, estimated_size)
            }
        }
    }
}

/// Replaces each zero axis of `natural` with the estimate on that axis.
fn fall_back_on_zero_axes(natural: Size, estimate: Size) -> Size {
    let mut size = natural;
    if size.width == 0.0 && estimate.width >= 0.0 {
        size.width = estimate.width;
    }
    if size.height == 0.0 && estimate.height >= 0.0 {
        size.height = estimate.height;
    }
    if size != natural {
        log::trace!("item measured {natural:?}, falling back to estimate {size:?}");
    }
    size
}

impl<V: ItemView> Component for ItemComponent<V> {
    fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    fn set_content_mode(&mut self, mode: ContentMode) {
        self.content_mode = mode;
    }

    fn render(&mut self) {
        let size = self.measure();
        self.container.set_size(size);
        let content = self.content.view();
        self.container.wrap_subview(content);
        self.container
            .set_background_color(content.background_color());
    }

    fn view(&self) -> &ViewHandle {
        &self.container
    }
}

#[cfg(test)]
#[path = "../tests/item_tests.rs"]
mod tests;
