use super::CollectionContext;
use crate::{Component, IndexPath};
use cellkit_ui_graphics::Size;

/// How a collection container sizes the items it materializes.
///
/// Containers differ only in the content mode they impose on each item and
/// in how they answer the host surface's size query; everything else is
/// shared by [`CollectionEngine`](super::CollectionEngine).
pub trait ItemLayoutPolicy {
    /// Runs once per render pass, right after the provider returns the item
    /// for `index_path` and before anything renders it.
    fn materialize(
        &mut self,
        context: &CollectionContext,
        index_path: IndexPath,
        item: &mut dyn Component,
    ) {
        let _ = (context, index_path, item);
    }

    /// Answers the host surface's size query.
    ///
    /// The item must be rendered before its preferred size is read.
    fn size_for_item(
        &mut self,
        context: &CollectionContext,
        index_path: IndexPath,
        item: &mut dyn Component,
    ) -> Size {
        let _ = (context, index_path);
        item.render();
        item.preferred_content_size()
    }
}

/// Leaves the item's own content mode alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultItemPolicy;

impl ItemLayoutPolicy for DefaultItemPolicy {}
