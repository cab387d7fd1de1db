//! Headless flow-layout host surface.

use super::{HostSurface, SurfaceDataSource};
use crate::{IndexPath, ViewHandle};
use cellkit_ui_graphics::{EdgeInsets, Point, Rect, Size};
use cellkit_ui_layout::{FlowLayout, ScrollDirection};
use smallvec::SmallVec;

/// Rounding slack per summed extent when deciding whether an item still fits
/// on the current line, relative to the line length.
const FIT_ULPS: f32 = 2.0;

/// Item placement computed by the last layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedItem {
    pub index_path: IndexPath,
    pub frame: Rect,
}

/// Host surface that lays items out in lines without any platform backing.
///
/// Items fill a line across the scroll direction, separated by the interitem
/// spacing, and wrap to a new line when the next one would overflow the
/// visible rect. Items shorter than their line are centered in it. An
/// optional header precedes the first section and an optional footer follows
/// the last one, which is how list containers use it.
#[derive(Debug)]
pub struct FlowSurface {
    view: ViewHandle,
    layout: FlowLayout,
    content_inset: EdgeInsets,
    safe_area_insets: EdgeInsets,
    reuse_identifier: Option<String>,
    header: Option<ViewHandle>,
    footer: Option<ViewHandle>,
    cells: Vec<ViewHandle>,
    placed: Vec<PlacedItem>,
    content_size: Size,
    needs_layout: bool,
}

impl FlowSurface {
    pub fn new() -> Self {
        Self::with_layout(FlowLayout::default())
    }

    pub fn with_layout(layout: FlowLayout) -> Self {
        Self {
            view: ViewHandle::new(),
            layout,
            content_inset: EdgeInsets::ZERO,
            safe_area_insets: EdgeInsets::ZERO,
            reuse_identifier: None,
            header: None,
            footer: None,
            cells: Vec::new(),
            placed: Vec::new(),
            content_size: Size::ZERO,
            needs_layout: true,
        }
    }

    pub fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset;
        self.needs_layout = true;
    }

    pub fn set_safe_area_insets(&mut self, insets: EdgeInsets) {
        self.safe_area_insets = insets;
        self.needs_layout = true;
    }

    pub fn header_view(&self) -> Option<&ViewHandle> {
        self.header.as_ref()
    }

    pub fn footer_view(&self) -> Option<&ViewHandle> {
        self.footer.as_ref()
    }

    /// Cells created by the last layout pass, in visiting order.
    pub fn cells(&self) -> &[ViewHandle] {
        &self.cells
    }

    pub fn placed_items(&self) -> &[PlacedItem] {
        &self.placed
    }

    pub fn frame_for_item(&self, index_path: IndexPath) -> Option<Rect> {
        self.placed
            .iter()
            .find(|placed| placed.index_path == index_path)
            .map(|placed| placed.frame)
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    fn perform_layout(&mut self, source: &mut dyn SurfaceDataSource) {
        let visible = self.visible_rect().size();
        let direction = self.layout.scroll_direction;
        let mut placer = LinePlacer::new(self.layout, visible);

        if let Some(header) = &self.header {
            header.set_origin(Point::ZERO);
            placer.advance(main_extent(header.size(), direction));
            self.view.add_subview(header);
        }

        let sections = source.number_of_sections();
        for section in 0..sections {
            let count = source.number_of_items(section);
            placer.begin_section();
            for item in 0..count {
                let index_path = IndexPath::new(section, item);
                let size = source.size_of_item(index_path);
                placer.place(index_path, size);
            }
            placer.end_section();
        }

        if let Some(footer) = &self.footer {
            footer.set_origin(placer.line_origin());
            placer.advance(main_extent(footer.size(), direction));
            self.view.add_subview(footer);
        }

        self.content_size = placer.content_size();
        self.placed = placer.into_placed();
        log::trace!(
            "flow surface placed {} items, content size {:?}",
            self.placed.len(),
            self.content_size
        );

        for (position, placed) in self.placed.iter().enumerate() {
            if position == self.cells.len() {
                self.cells.push(ViewHandle::new());
            }
            let cell = &self.cells[position];
            cell.remove_all_subviews();
            cell.set_frame(placed.frame);
            self.view.add_subview(cell);
            source.configure_cell(cell, placed.index_path);
        }
        for stale in self.cells.drain(self.placed.len()..) {
            stale.remove_from_superview();
        }

        self.needs_layout = false;
    }
}

impl Default for FlowSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSurface for FlowSurface {
    fn view(&self) -> &ViewHandle {
        &self.view
    }

    fn register_cell(&mut self, reuse_identifier: &str) {
        self.reuse_identifier = Some(reuse_identifier.to_owned());
    }

    fn registered_identifier(&self) -> Option<&str> {
        self.reuse_identifier.as_deref()
    }

    fn flow_layout(&self) -> FlowLayout {
        self.layout
    }

    fn set_flow_layout(&mut self, layout: FlowLayout) {
        self.layout = layout;
        self.needs_layout = true;
    }

    fn set_header_view(&mut self, view: Option<ViewHandle>) {
        if let Some(previous) = self.header.take() {
            previous.remove_from_superview();
        }
        self.header = view;
        self.needs_layout = true;
    }

    fn set_footer_view(&mut self, view: Option<ViewHandle>) {
        if let Some(previous) = self.footer.take() {
            previous.remove_from_superview();
        }
        self.footer = view;
        self.needs_layout = true;
    }

    fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    fn safe_area_insets(&self) -> EdgeInsets {
        self.safe_area_insets
    }

    fn invalidate_layout(&mut self) {
        self.needs_layout = true;
    }

    fn reload_data(&mut self, _source: &mut dyn SurfaceDataSource) {
        for cell in &self.cells {
            cell.remove_all_subviews();
            cell.remove_from_superview();
        }
        self.placed.clear();
        self.needs_layout = true;
    }

    fn layout_if_needed(&mut self, source: &mut dyn SurfaceDataSource) {
        if self.needs_layout {
            self.perform_layout(source);
        }
    }

    fn content_size(&self) -> Size {
        self.content_size
    }
}

/// Splits a size into (cross, main) extents for the scroll direction.
fn split(size: Size, direction: ScrollDirection) -> (f32, f32) {
    match direction {
        ScrollDirection::Vertical => (size.width, size.height),
        ScrollDirection::Horizontal => (size.height, size.width),
    }
}

fn main_extent(size: Size, direction: ScrollDirection) -> f32 {
    split(size, direction).1
}

fn join(cross: f32, main: f32, direction: ScrollDirection) -> Point {
    match direction {
        ScrollDirection::Vertical => Point::new(cross, main),
        ScrollDirection::Horizontal => Point::new(main, cross),
    }
}

struct LinePlacer {
    layout: FlowLayout,
    visible: Size,
    cross_start: f32,
    cross_limit: f32,
    cross_cursor: f32,
    main_cursor: f32,
    line_extent: f32,
    line: SmallVec<[usize; 8]>,
    placed: Vec<PlacedItem>,
    main_offsets: Vec<f32>,
}

impl LinePlacer {
    fn new(layout: FlowLayout, visible: Size) -> Self {
        Self {
            layout,
            visible,
            cross_start: 0.0,
            cross_limit: split(visible, layout.scroll_direction).0,
            cross_cursor: 0.0,
            main_cursor: 0.0,
            line_extent: 0.0,
            line: SmallVec::new(),
            placed: Vec::new(),
            main_offsets: Vec::new(),
        }
    }

    fn direction(&self) -> ScrollDirection {
        self.layout.scroll_direction
    }

    /// (leading cross, trailing cross, leading main, trailing main) section insets.
    fn section_insets(&self) -> (f32, f32, f32, f32) {
        let inset = self.layout.section_inset;
        match self.direction() {
            ScrollDirection::Vertical => (inset.left, inset.right, inset.top, inset.bottom),
            ScrollDirection::Horizontal => (inset.top, inset.bottom, inset.left, inset.right),
        }
    }

    fn advance(&mut self, extent: f32) {
        self.main_cursor += extent;
    }

    fn line_origin(&self) -> Point {
        join(0.0, self.main_cursor, self.direction())
    }

    fn begin_section(&mut self) {
        let (cross_leading, cross_trailing, main_leading, _) = self.section_insets();
        let available = split(self.visible, self.direction()).0;
        self.cross_start = cross_leading;
        self.cross_limit = available - cross_trailing;
        self.cross_cursor = cross_leading;
        self.main_cursor += main_leading;
    }

    fn end_section(&mut self) {
        if !self.line.is_empty() {
            self.finish_line();
        }
        let (_, _, _, main_trailing) = self.section_insets();
        self.main_cursor += main_trailing;
    }

    fn place(&mut self, index_path: IndexPath, size: Size) {
        let direction = self.direction();
        let (cross, main) = split(size, direction);

        if !self.line.is_empty() {
            let next_end = self.cross_cursor + self.layout.interitem_spacing + cross;
            if self.layout.one_item_per_line || next_end > self.cross_limit + self.fit_slack() {
                self.finish_line();
                self.main_cursor += self.layout.line_spacing;
            } else {
                self.cross_cursor += self.layout.interitem_spacing;
            }
        }

        let origin = join(self.cross_cursor, self.main_cursor, direction);
        self.line.push(self.placed.len());
        self.placed.push(PlacedItem {
            index_path,
            frame: Rect::from_origin_size(origin, size),
        });
        self.main_offsets.push(main);
        self.cross_cursor += cross;
        self.line_extent = self.line_extent.max(main);
    }

    /// Every item and gap on the line adds one rounding step to the cursor,
    /// so the slack grows with both the line length and the item count.
    fn fit_slack(&self) -> f32 {
        let terms = (2 * self.line.len() + 1) as f32;
        f32::EPSILON * self.cross_limit.abs().max(1.0) * terms * FIT_ULPS
    }

    fn finish_line(&mut self) {
        let direction = self.direction();
        for &position in &self.line {
            let centering = (self.line_extent - self.main_offsets[position]) / 2.0;
            let frame = &mut self.placed[position].frame;
            match direction {
                ScrollDirection::Vertical => frame.y += centering,
                ScrollDirection::Horizontal => frame.x += centering,
            }
        }
        self.main_cursor += self.line_extent;
        self.line.clear();
        self.line_extent = 0.0;
        self.cross_cursor = self.cross_start;
    }

    fn content_size(&self) -> Size {
        match self.direction() {
            ScrollDirection::Vertical => Size::new(self.visible.width, self.main_cursor),
            ScrollDirection::Horizontal => Size::new(self.main_cursor, self.visible.height),
        }
    }

    fn into_placed(self) -> Vec<PlacedItem> {
        self.placed
    }
}

#[cfg(test)]
#[path = "../tests/flow_surface_tests.rs"]
mod tests;
