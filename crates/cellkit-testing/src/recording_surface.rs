//! A host surface that records its callbacks.

use cellkit_foundation::{
    FlowLayout, FlowSurface, HostSurface, IndexPath, SurfaceDataSource, ViewHandle,
};
use cellkit_ui_graphics::{EdgeInsets, Size};
use std::cell::RefCell;
use std::rc::Rc;

/// Something a [`RecordingSurface`] did or asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    RegisterCell(String),
    InvalidateLayout,
    ReloadData,
    LayoutIfNeeded,
    NumberOfItems(usize),
    SizeOfItem(IndexPath),
    ConfigureCell(IndexPath),
    /// The surface content size read right after a layout pass.
    ContentSize(Size),
}

/// Shared handle to the events of a [`RecordingSurface`].
#[derive(Clone, Debug, Default)]
pub struct SurfaceLog {
    events: Rc<RefCell<Vec<SurfaceEvent>>>,
}

impl SurfaceLog {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Index paths sized, in the order the surface asked.
    pub fn sized_items(&self) -> Vec<IndexPath> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::SizeOfItem(index_path) => Some(*index_path),
                _ => None,
            })
            .collect()
    }

    /// Position of the first event matching `event`, if any.
    pub fn position(&self, event: &SurfaceEvent) -> Option<usize> {
        self.events.borrow().iter().position(|recorded| recorded == event)
    }

    pub fn count(&self, predicate: impl Fn(&SurfaceEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|event| predicate(event)).count()
    }

    fn push(&self, event: SurfaceEvent) {
        log::trace!("surface event {event:?}");
        self.events.borrow_mut().push(event);
    }
}

/// A [`FlowSurface`] that logs every call the engine makes on it and every
/// callback it makes into the engine.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    inner: FlowSurface,
    log: SurfaceLog,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insets(content_inset: EdgeInsets, safe_area_insets: EdgeInsets) -> Self {
        let mut surface = Self::new();
        surface.inner.set_content_inset(content_inset);
        surface.inner.set_safe_area_insets(safe_area_insets);
        surface
    }

    pub fn log(&self) -> SurfaceLog {
        self.log.clone()
    }

    pub fn flow_surface(&self) -> &FlowSurface {
        &self.inner
    }
}

struct RecordingSource<'a> {
    inner: &'a mut dyn SurfaceDataSource,
    log: &'a SurfaceLog,
}

impl SurfaceDataSource for RecordingSource<'_> {
    fn number_of_sections(&self) -> usize {
        self.inner.number_of_sections()
    }

    fn number_of_items(&mut self, section: usize) -> usize {
        self.log.push(SurfaceEvent::NumberOfItems(section));
        self.inner.number_of_items(section)
    }

    fn size_of_item(&mut self, index_path: IndexPath) -> Size {
        self.log.push(SurfaceEvent::SizeOfItem(index_path));
        self.inner.size_of_item(index_path)
    }

    fn configure_cell(&mut self, cell: &ViewHandle, index_path: IndexPath) {
        self.log.push(SurfaceEvent::ConfigureCell(index_path));
        self.inner.configure_cell(cell, index_path);
    }
}

impl HostSurface for RecordingSurface {
    fn view(&self) -> &ViewHandle {
        self.inner.view()
    }

    fn register_cell(&mut self, reuse_identifier: &str) {
        self.log
            .push(SurfaceEvent::RegisterCell(reuse_identifier.to_owned()));
        self.inner.register_cell(reuse_identifier);
    }

    fn registered_identifier(&self) -> Option<&str> {
        self.inner.registered_identifier()
    }

    fn flow_layout(&self) -> FlowLayout {
        self.inner.flow_layout()
    }

    fn set_flow_layout(&mut self, layout: FlowLayout) {
        self.inner.set_flow_layout(layout);
    }

    fn set_header_view(&mut self, view: Option<ViewHandle>) {
        self.inner.set_header_view(view);
    }

    fn set_footer_view(&mut self, view: Option<ViewHandle>) {
        self.inner.set_footer_view(view);
    }

    fn content_inset(&self) -> EdgeInsets {
        self.inner.content_inset()
    }

    fn safe_area_insets(&self) -> EdgeInsets {
        self.inner.safe_area_insets()
    }

    fn invalidate_layout(&mut self) {
        self.log.push(SurfaceEvent::InvalidateLayout);
        self.inner.invalidate_layout();
    }

    fn reload_data(&mut self, source: &mut dyn SurfaceDataSource) {
        self.log.push(SurfaceEvent::ReloadData);
        let mut recording = RecordingSource {
            inner: source,
            log: &self.log,
        };
        self.inner.reload_data(&mut recording);
    }

    fn layout_if_needed(&mut self, source: &mut dyn SurfaceDataSource) {
        self.log.push(SurfaceEvent::LayoutIfNeeded);
        let mut recording = RecordingSource {
            inner: source,
            log: &self.log,
        };
        self.inner.layout_if_needed(&mut recording);
        self.log
            .push(SurfaceEvent::ContentSize(self.inner.content_size()));
    }

    fn content_size(&self) -> Size {
        self.inner.content_size()
    }
}

#[cfg(test)]
#[path = "tests/recording_surface_tests.rs"]
mod tests;
