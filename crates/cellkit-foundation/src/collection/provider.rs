use crate::{ComponentRef, IndexPath};
use cellkit_ui_graphics::{Rect, Size};
use cellkit_ui_layout::ContentMode;

/// What a provider may know about the container it serves.
///
/// Refreshed each time the container resolves its bounds, before the host
/// surface starts enumerating items.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CollectionContext {
    pub content_mode: ContentMode,
    pub bounds: Size,
    pub visible_rect: Rect,
}

/// Answers how many items a section holds.
pub type NumberOfItemsProvider = Box<dyn FnMut(&CollectionContext, usize) -> usize>;

/// Builds (or hands back) the component shown at an index path.
pub type ItemProvider = Box<dyn FnMut(&CollectionContext, IndexPath) -> ComponentRef>;
