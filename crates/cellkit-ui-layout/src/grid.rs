//! Grid dimensions and the uniform cell math used by grid containers.

use crate::{LayoutError, ScrollDirection};
use cellkit_ui_graphics::Size;

/// Column and row counts of a grid page.
///
/// Both counts are at least 1. Zero is a configuration error rather than a
/// runtime condition, so the infallible constructors and setters panic on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    columns: usize,
    rows: usize,
}

impl Grid {
    /// Creates a grid.
    ///
    /// # Panics
    ///
    /// Panics if `columns` or `rows` is zero.
    pub fn new(columns: usize, rows: usize) -> Self {
        match Self::try_new(columns, rows) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(columns: usize, rows: usize) -> Result<Self, LayoutError> {
        validate_columns(columns)?;
        validate_rows(rows)?;
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// # Panics
    ///
    /// Panics if `columns` is zero.
    pub fn set_columns(&mut self, columns: usize) {
        if let Err(err) = self.try_set_columns(columns) {
            panic!("{err}");
        }
    }

    pub fn try_set_columns(&mut self, columns: usize) -> Result<(), LayoutError> {
        validate_columns(columns)?;
        self.columns = columns;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `rows` is zero.
    pub fn set_rows(&mut self, rows: usize) {
        if let Err(err) = self.try_set_rows(rows) {
            panic!("{err}");
        }
    }

    pub fn try_set_rows(&mut self, rows: usize) -> Result<(), LayoutError> {
        validate_rows(rows)?;
        self.rows = rows;
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            columns: 1,
            rows: 1,
        }
    }
}

impl TryFrom<(usize, usize)> for Grid {
    type Error = LayoutError;

    fn try_from((columns, rows): (usize, usize)) -> Result<Self, Self::Error> {
        Self::try_new(columns, rows)
    }
}

fn validate_columns(columns: usize) -> Result<(), LayoutError> {
    if columns < 1 {
        return Err(LayoutError::InvalidColumns { columns });
    }
    Ok(())
}

fn validate_rows(rows: usize) -> Result<(), LayoutError> {
    if rows < 1 {
        return Err(LayoutError::InvalidRows { rows });
    }
    Ok(())
}

/// Geometry inputs of a grid container.
///
/// The visible area is divided into `columns × rows` uniform cells. Spacing
/// terms are bound to their interitem/line roles, and those roles move with
/// the scroll direction:
///
/// ```text
/// vertical:   width  = (W - (columns - 1) * interitem) / columns
///             height = (H - (rows - 1) * line)         / rows
/// horizontal: width  = (W - (rows - 1) * line)         / columns
///             height = (H - (columns - 1) * interitem) / rows
/// ```
///
/// The horizontal mapping is not a transpose of the vertical one.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GridLayout {
    pub grid: Grid,
    pub interitem_spacing: f32,
    pub line_spacing: f32,
    pub scroll_direction: ScrollDirection,
}

impl GridLayout {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    pub fn interitem_spacing(mut self, spacing: f32) -> Self {
        self.interitem_spacing = spacing;
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn scroll_direction(mut self, direction: ScrollDirection) -> Self {
        self.scroll_direction = direction;
        self
    }

    /// Size every cell is pinned to for the given visible area.
    pub fn cell_size(&self, visible: Size) -> Size {
        let columns = self.grid.columns();
        let rows = self.grid.rows();

        match self.scroll_direction {
            ScrollDirection::Vertical => {
                let interitems = spacing_subtotal(columns, self.interitem_spacing);
                let lines = spacing_subtotal(rows, self.line_spacing);
                Size::new(
                    (visible.width - interitems) / columns as f32,
                    (visible.height - lines) / rows as f32,
                )
            }
            ScrollDirection::Horizontal => {
                let lines = spacing_subtotal(rows, self.line_spacing);
                let interitems = spacing_subtotal(columns, self.interitem_spacing);
                Size::new(
                    (visible.width - lines) / columns as f32,
                    (visible.height - interitems) / rows as f32,
                )
            }
        }
    }
}

/// Total spacing between `count` cells, clamped so it never adds space.
fn spacing_subtotal(count: usize, spacing: f32) -> f32 {
    let subtotal = count.saturating_sub(1) as f32 * spacing;
    if subtotal < 0.0 {
        log::trace!("clamping negative grid spacing subtotal {subtotal} to zero");
        return 0.0;
    }
    subtotal
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
