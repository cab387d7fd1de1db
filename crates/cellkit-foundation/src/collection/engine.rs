use super::{
    CollectionComponent, CollectionContext, DefaultItemPolicy, ItemLayoutPolicy, ItemProvider,
    MaterializationCache, NumberOfItemsProvider,
};
use crate::surface::{FlowSurface, HostSurface, SurfaceDataSource, CELL_REUSE_IDENTIFIER};
use crate::{CollectionError, Component, ComponentRef, IndexPath, ViewHandle};
use cellkit_ui_graphics::{Rect, Size};
use cellkit_ui_layout::ContentMode;
use std::fmt;

/// The data-source half of a collection engine.
///
/// Holds everything the host surface calls back into while it lays out:
/// providers, the materialization cache, and the item layout policy. The
/// engine lends it to the surface for the duration of a layout call.
pub struct CollectionBridge<P> {
    number_of_sections: usize,
    number_of_items: Option<NumberOfItemsProvider>,
    item_provider: Option<ItemProvider>,
    cache: MaterializationCache,
    context: CollectionContext,
    policy: P,
}

impl<P: ItemLayoutPolicy> CollectionBridge<P> {
    fn new(policy: P) -> Self {
        Self {
            number_of_sections: 0,
            number_of_items: None,
            item_provider: None,
            cache: MaterializationCache::new(),
            context: CollectionContext::default(),
            policy,
        }
    }

    fn try_item_component(
        &mut self,
        index_path: IndexPath,
    ) -> Result<ComponentRef, CollectionError> {
        if let Some(item) = self.cache.get(&index_path) {
            return Ok(item.clone());
        }
        let provider = self
            .item_provider
            .as_mut()
            .ok_or(CollectionError::MissingItemProvider { index_path })?;
        let item = provider(&self.context, index_path);
        self.policy
            .materialize(&self.context, index_path, &mut *item.borrow_mut());
        log::trace!("materialized item {index_path}");
        self.cache.insert(index_path, item.clone());
        Ok(item)
    }

    fn item_component(&mut self, index_path: IndexPath) -> ComponentRef {
        match self.try_item_component(index_path) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<P: ItemLayoutPolicy> SurfaceDataSource for CollectionBridge<P> {
    fn number_of_sections(&self) -> usize {
        self.number_of_sections
    }

    fn number_of_items(&mut self, section: usize) -> usize {
        match self.number_of_items.as_mut() {
            Some(provider) => provider(&self.context, section),
            None => 0,
        }
    }

    fn size_of_item(&mut self, index_path: IndexPath) -> Size {
        let item = self.item_component(index_path);
        let size = self
            .policy
            .size_for_item(&self.context, index_path, &mut *item.borrow_mut());
        log::trace!("item {index_path} sized {size:?}");
        size
    }

    fn configure_cell(&mut self, cell: &ViewHandle, index_path: IndexPath) {
        let item = self.item_component(index_path);
        let item = item.borrow();
        cell.set_size(item.preferred_content_size());
        cell.wrap_subview(item.view());
    }
}

/// A collection container driven by a host surface.
///
/// Rendering clears the materialization cache, sizes the surface from the
/// content mode, and makes the surface reload and lay out synchronously.
/// Every item the surface visits is materialized, rendered, and measured
/// during that layout. In automatic mode the engine then adopts the
/// surface's content height, unless the owner opted out with
/// [`set_adopts_content_height`](Self::set_adopts_content_height).
///
/// `P` decides what content mode each item renders under; the list, grid,
/// and carousel containers are engines with their own policy.
pub struct CollectionEngine<P: ItemLayoutPolicy = DefaultItemPolicy> {
    content_mode: ContentMode,
    surface: Box<dyn HostSurface>,
    bridge: CollectionBridge<P>,
    adopts_content_height: bool,
}

impl CollectionEngine {
    /// An engine that leaves item content modes alone.
    pub fn plain(content_mode: ContentMode) -> Self {
        Self::new(content_mode, DefaultItemPolicy)
    }
}

impl<P: ItemLayoutPolicy> CollectionEngine<P> {
    pub fn new(content_mode: ContentMode, policy: P) -> Self {
        Self::with_surface(content_mode, policy, Box::new(FlowSurface::new()))
    }

    pub fn with_surface(
        content_mode: ContentMode,
        policy: P,
        mut surface: Box<dyn HostSurface>,
    ) -> Self {
        surface.register_cell(CELL_REUSE_IDENTIFIER);
        surface.view().set_size(content_mode.size());
        Self {
            content_mode,
            surface,
            bridge: CollectionBridge::new(policy),
            adopts_content_height: true,
        }
    }

    /// Sizes the surface from the content mode and refreshes the context
    /// handed to providers and policies. Returns the resolved bounds.
    pub fn resolve_bounds(&mut self) -> Size {
        let bounds = self.content_mode.size();
        self.surface.view().set_size(bounds);
        self.bridge.context = CollectionContext {
            content_mode: self.content_mode,
            bounds,
            visible_rect: self.surface.visible_rect(),
        };
        bounds
    }

    /// Starts a render pass: drops every materialized item and resolves the
    /// bounds. Containers adjust their policy between this and
    /// [`finish_render`](Self::finish_render).
    pub fn begin_render(&mut self) -> Size {
        self.bridge.cache.clear();
        let bounds = self.resolve_bounds();
        log::debug!(
            "collection render: mode {:?}, bounds {:?}",
            self.content_mode,
            bounds
        );
        bounds
    }

    /// Makes the surface re-enumerate and lay out every item, then adopts
    /// the content height in automatic mode.
    pub fn finish_render(&mut self) {
        self.surface.invalidate_layout();
        self.surface.reload_data(&mut self.bridge);
        self.surface.layout_if_needed(&mut self.bridge);

        if self.content_mode.is_automatic() && self.adopts_content_height {
            let view = self.surface.view();
            let height = self.surface.content_size().height;
            view.set_size(view.size().with_height(height));
            log::debug!("collection adopted content height {height}");
        }
    }

    pub fn adopts_content_height(&self) -> bool {
        self.adopts_content_height
    }

    /// Whether automatic mode grows the view to the laid-out content height.
    /// When off, the view keeps the size resolved from the content mode.
    pub fn set_adopts_content_height(&mut self, adopts: bool) {
        self.adopts_content_height = adopts;
    }

    pub fn visible_rect(&self) -> Rect {
        self.surface.visible_rect()
    }

    pub fn context(&self) -> &CollectionContext {
        &self.bridge.context
    }

    pub fn cache(&self) -> &MaterializationCache {
        &self.bridge.cache
    }

    pub fn surface(&self) -> &dyn HostSurface {
        &*self.surface
    }

    pub fn surface_mut(&mut self) -> &mut dyn HostSurface {
        &mut *self.surface
    }

    pub fn policy(&self) -> &P {
        &self.bridge.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.bridge.policy
    }
}

impl<P: ItemLayoutPolicy> Component for CollectionEngine<P> {
    fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    fn set_content_mode(&mut self, mode: ContentMode) {
        self.content_mode = mode;
    }

    fn render(&mut self) {
        self.begin_render();
        self.finish_render();
    }

    fn view(&self) -> &ViewHandle {
        self.surface.view()
    }
}

impl<P: ItemLayoutPolicy> CollectionComponent for CollectionEngine<P> {
    fn number_of_sections(&self) -> usize {
        self.bridge.number_of_sections
    }

    fn set_number_of_sections(&mut self, sections: usize) {
        self.bridge.number_of_sections = sections;
    }

    fn number_of_items(&mut self, section: usize) -> usize {
        SurfaceDataSource::number_of_items(&mut self.bridge, section)
    }

    fn set_number_of_items(&mut self, provider: NumberOfItemsProvider) {
        self.bridge.number_of_items = Some(provider);
    }

    fn try_item_component(
        &mut self,
        index_path: IndexPath,
    ) -> Result<ComponentRef, CollectionError> {
        self.bridge.try_item_component(index_path)
    }

    fn set_item_provider(&mut self, provider: ItemProvider) {
        self.bridge.item_provider = Some(provider);
    }
}

impl<P: ItemLayoutPolicy + fmt::Debug> fmt::Debug for CollectionEngine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionEngine")
            .field("content_mode", &self.content_mode)
            .field("adopts_content_height", &self.adopts_content_height)
            .field("number_of_sections", &self.bridge.number_of_sections)
            .field("cache", &self.bridge.cache)
            .field("policy", &self.bridge.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/engine_tests.rs"]
mod tests;
