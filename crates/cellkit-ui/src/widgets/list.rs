//! List component implementation

use crate::layout::ListRowPolicy;
use cellkit_foundation::{
    CollectionEngine, Component, ComponentRef, FlowSurface, HostSurface, ListCollectionComponent,
    ViewHandle,
};
use cellkit_ui_graphics::Size;
use cellkit_ui_layout::{ContentMode, ScrollDirection};

/// A single-column vertical collection with an optional header and footer.
///
/// Rows, the header, and the footer all take the list's width. Each keeps
/// the height its own content mode carries and reports the height it
/// rendered at. A `Fixed` list keeps its size; an `Automatic` list grows to
/// header, rows, and footer stacked together.
pub struct ListComponent {
    engine: CollectionEngine<ListRowPolicy>,
    header: Option<ComponentRef>,
    footer: Option<ComponentRef>,
}

impl ListComponent {
    pub fn new(content_mode: ContentMode) -> Self {
        Self::with_surface(content_mode, Box::new(FlowSurface::new()))
    }

    pub fn with_surface(content_mode: ContentMode, mut surface: Box<dyn HostSurface>) -> Self {
        let layout = surface
            .flow_layout()
            .scroll_direction(ScrollDirection::Vertical);
        surface.set_flow_layout(layout);
        Self {
            engine: CollectionEngine::with_surface(content_mode, ListRowPolicy, surface),
            header: None,
            footer: None,
        }
    }

    pub fn engine(&self) -> &CollectionEngine<ListRowPolicy> {
        &self.engine
    }
}

/// Renders a header or footer at `width`, keeping the height it declares.
fn fit_accessory(accessory: &ComponentRef, width: f32) -> ViewHandle {
    let mut accessory = accessory.borrow_mut();
    let height = accessory.content_mode().size().height;
    accessory.set_content_mode(ContentMode::automatic(Size::new(width, height)));
    accessory.render();

    let view = accessory.view().clone();
    view.set_size(view.size().with_width(width));
    view
}

impl Component for ListComponent {
    fn content_mode(&self) -> ContentMode {
        self.engine.content_mode()
    }

    fn set_content_mode(&mut self, mode: ContentMode) {
        self.engine.set_content_mode(mode);
    }

    fn render(&mut self) {
        let bounds = self.engine.begin_render();

        let header = self
            .header
            .as_ref()
            .map(|header| fit_accessory(header, bounds.width));
        let footer = self
            .footer
            .as_ref()
            .map(|footer| fit_accessory(footer, bounds.width));
        let surface = self.engine.surface_mut();
        surface.set_header_view(header);
        surface.set_footer_view(footer);

        self.engine.finish_render();
    }

    fn view(&self) -> &ViewHandle {
        self.engine.view()
    }
}

delegate_collection_component!(ListComponent);

impl ListCollectionComponent for ListComponent {
    fn header(&self) -> Option<&ComponentRef> {
        self.header.as_ref()
    }

    fn set_header(&mut self, header: Option<ComponentRef>) {
        self.header = header;
    }

    fn footer(&self) -> Option<&ComponentRef> {
        self.footer.as_ref()
    }

    fn set_footer(&mut self, footer: Option<ComponentRef>) {
        self.footer = footer;
    }
}

#[cfg(test)]
#[path = "../tests/list_tests.rs"]
mod tests;
