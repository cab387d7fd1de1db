//! Host surface contract.
//!
//! A host surface is the scrolling container a collection engine renders
//! into. It enumerates items through a [`SurfaceDataSource`] during its own
//! layout pass, asking for each item's size before configuring its cell. The
//! engine lends its data source for the duration of `reload_data` and
//! `layout_if_needed`; the surface never keeps a reference back.

mod flow_surface;

pub use flow_surface::*;

use crate::{IndexPath, ViewHandle};
use cellkit_ui_graphics::{EdgeInsets, Rect, Size};
use cellkit_ui_layout::FlowLayout;

/// Reuse identifier every engine registers its single generic cell type under.
pub const CELL_REUSE_IDENTIFIER: &str = "cellkit.collection-cell";

/// Callbacks a host surface invokes while laying out.
pub trait SurfaceDataSource {
    fn number_of_sections(&self) -> usize;

    fn number_of_items(&mut self, section: usize) -> usize;

    /// Size of the item at `index_path`. Answering may render the item.
    fn size_of_item(&mut self, index_path: IndexPath) -> Size;

    /// Injects the item's view into a freshly dequeued cell.
    fn configure_cell(&mut self, cell: &ViewHandle, index_path: IndexPath);
}

/// A scrollable container able to create cells on demand.
pub trait HostSurface {
    /// The scroll container itself. Its frame size is the surface bounds.
    fn view(&self) -> &ViewHandle;

    fn register_cell(&mut self, reuse_identifier: &str);

    /// Identifier cells are dequeued under, once one has been registered.
    fn registered_identifier(&self) -> Option<&str>;

    fn flow_layout(&self) -> FlowLayout;

    fn set_flow_layout(&mut self, layout: FlowLayout);

    /// Views placed before the first item and after the last item.
    fn set_header_view(&mut self, view: Option<ViewHandle>);

    fn set_footer_view(&mut self, view: Option<ViewHandle>);

    fn content_inset(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }

    fn safe_area_insets(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }

    /// Bounds minus content and safe-area insets, clamped at zero.
    fn visible_rect(&self) -> Rect {
        cellkit_ui_layout::visible_rect(
            self.view().size(),
            self.content_inset(),
            self.safe_area_insets(),
        )
    }

    fn invalidate_layout(&mut self);

    /// Drops every cell and schedules a layout that re-enumerates `source`.
    fn reload_data(&mut self, source: &mut dyn SurfaceDataSource);

    /// Runs any pending layout synchronously, calling back into `source`.
    fn layout_if_needed(&mut self, source: &mut dyn SurfaceDataSource);

    /// Size of the laid-out content; meaningful after `layout_if_needed`.
    fn content_size(&self) -> Size;
}
