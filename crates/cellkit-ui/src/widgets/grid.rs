//! Grid component implementation

use crate::layout::UniformCellPolicy;
use cellkit_foundation::{CollectionEngine, Component, FlowSurface, HostSurface, ViewHandle};
use cellkit_ui_graphics::Size;
use cellkit_ui_layout::{ContentMode, Grid, GridLayout, LayoutError, ScrollDirection};

/// A collection that divides its visible area into uniform cells.
///
/// Every item is pinned to `Fixed(cell_size)` whatever mode it asked for.
/// The cell size is computed once per render from the visible rect, see
/// [`GridLayout::cell_size`].
pub struct GridComponent {
    engine: CollectionEngine<UniformCellPolicy>,
    layout: GridLayout,
}

impl GridComponent {
    pub fn new(content_mode: ContentMode, grid: Grid) -> Self {
        Self::with_surface(content_mode, grid, Box::new(FlowSurface::new()))
    }

    pub fn with_surface(
        content_mode: ContentMode,
        grid: Grid,
        surface: Box<dyn HostSurface>,
    ) -> Self {
        Self {
            engine: CollectionEngine::with_surface(
                content_mode,
                UniformCellPolicy::default(),
                surface,
            ),
            layout: GridLayout::new(grid),
        }
    }

    pub fn grid(&self) -> Grid {
        self.layout.grid
    }

    pub fn set_grid(&mut self, grid: Grid) {
        self.layout.grid = grid;
    }

    /// # Panics
    ///
    /// Panics if `columns` is zero.
    pub fn set_columns(&mut self, columns: usize) {
        self.layout.grid.set_columns(columns);
    }

    pub fn try_set_columns(&mut self, columns: usize) -> Result<(), LayoutError> {
        self.layout.grid.try_set_columns(columns)
    }

    /// # Panics
    ///
    /// Panics if `rows` is zero.
    pub fn set_rows(&mut self, rows: usize) {
        self.layout.grid.set_rows(rows);
    }

    pub fn try_set_rows(&mut self, rows: usize) -> Result<(), LayoutError> {
        self.layout.grid.try_set_rows(rows)
    }

    pub fn interitem_spacing(&self) -> f32 {
        self.layout.interitem_spacing
    }

    pub fn set_interitem_spacing(&mut self, spacing: f32) {
        self.layout.interitem_spacing = spacing;
    }

    pub fn line_spacing(&self) -> f32 {
        self.layout.line_spacing
    }

    pub fn set_line_spacing(&mut self, spacing: f32) {
        self.layout.line_spacing = spacing;
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.layout.scroll_direction
    }

    pub fn set_scroll_direction(&mut self, direction: ScrollDirection) {
        self.layout.scroll_direction = direction;
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Cell size of the last render.
    pub fn cell_size(&self) -> Size {
        self.engine.policy().cell_size
    }

    pub fn engine(&self) -> &CollectionEngine<UniformCellPolicy> {
        &self.engine
    }
}

impl Component for GridComponent {
    fn content_mode(&self) -> ContentMode {
        self.engine.content_mode()
    }

    fn set_content_mode(&mut self, mode: ContentMode) {
        self.engine.set_content_mode(mode);
    }

    fn render(&mut self) {
        self.engine.begin_render();

        let visible = self.engine.visible_rect().size();
        let cell_size = self.layout.cell_size(visible);
        log::debug!("grid {:?} cell size {cell_size:?}", self.layout.grid);
        self.engine.policy_mut().cell_size = cell_size;

        let flow = self
            .engine
            .surface()
            .flow_layout()
            .interitem_spacing(self.layout.interitem_spacing)
            .line_spacing(self.layout.line_spacing)
            .scroll_direction(self.layout.scroll_direction);
        self.engine.surface_mut().set_flow_layout(flow);

        self.engine.finish_render();
    }

    fn view(&self) -> &ViewHandle {
        self.engine.view()
    }
}

delegate_collection_component!(GridComponent);

#[cfg(test)]
#[path = "../tests/grid_tests.rs"]
mod tests;
