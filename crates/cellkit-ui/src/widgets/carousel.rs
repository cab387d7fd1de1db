//! Carousel component implementation

use crate::layout::StretchPolicy;
use cellkit_foundation::{CollectionEngine, Component, FlowSurface, HostSurface, ViewHandle};
use cellkit_ui_layout::{ContentMode, ScrollDirection};

/// A single strip of items stretched to fill the visible extent.
///
/// See [`StretchPolicy`] for how each item is sized. Unlike grid cells,
/// carousel items keep their own size on the other axis, so neighbours may
/// differ. Items never share a line: each one follows the previous along the
/// scroll direction, and an automatic carousel keeps its resolved bounds
/// instead of growing to the strip's length.
pub struct CarouselComponent {
    engine: CollectionEngine<StretchPolicy>,
    interitem_spacing: f32,
}

impl CarouselComponent {
    pub fn new(content_mode: ContentMode) -> Self {
        Self::with_surface(content_mode, Box::new(FlowSurface::new()))
    }

    pub fn with_surface(content_mode: ContentMode, surface: Box<dyn HostSurface>) -> Self {
        let mut engine =
            CollectionEngine::with_surface(content_mode, StretchPolicy::default(), surface);
        engine.set_adopts_content_height(false);
        Self {
            engine,
            interitem_spacing: 0.0,
        }
    }

    pub fn interitem_spacing(&self) -> f32 {
        self.interitem_spacing
    }

    /// Gap between consecutive items along the scroll direction.
    pub fn set_interitem_spacing(&mut self, spacing: f32) {
        self.interitem_spacing = spacing;
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.engine.policy().scroll_direction
    }

    pub fn set_scroll_direction(&mut self, direction: ScrollDirection) {
        self.engine.policy_mut().scroll_direction = direction;
    }

    pub fn engine(&self) -> &CollectionEngine<StretchPolicy> {
        &self.engine
    }
}

impl Component for CarouselComponent {
    fn content_mode(&self) -> ContentMode {
        self.engine.content_mode()
    }

    fn set_content_mode(&mut self, mode: ContentMode) {
        self.engine.set_content_mode(mode);
    }

    fn render(&mut self) {
        self.engine.begin_render();

        let flow = self
            .engine
            .surface()
            .flow_layout()
            .one_item_per_line(true)
            .interitem_spacing(0.0)
            .line_spacing(self.interitem_spacing)
            .scroll_direction(self.scroll_direction());
        self.engine.surface_mut().set_flow_layout(flow);

        self.engine.finish_render();
    }

    fn view(&self) -> &ViewHandle {
        self.engine.view()
    }
}

delegate_collection_component!(CarouselComponent);

#[cfg(test)]
#[path = "../tests/carousel_tests.rs"]
mod tests;
