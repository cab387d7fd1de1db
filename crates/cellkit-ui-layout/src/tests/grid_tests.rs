use super::*;

#[test]
fn grid_rejects_zero_columns() {
    assert_eq!(
        Grid::try_new(0, 3),
        Err(LayoutError::InvalidColumns { columns: 0 })
    );
}

#[test]
fn grid_rejects_zero_rows() {
    assert_eq!(Grid::try_new(2, 0), Err(LayoutError::InvalidRows { rows: 0 }));
}

#[test]
#[should_panic(expected = "the number of columns must be greater than or equal to 1")]
fn grid_new_panics_on_zero_columns() {
    let _ = Grid::new(0, 1);
}

#[test]
#[should_panic(expected = "the number of rows must be greater than or equal to 1")]
fn grid_set_rows_panics_on_zero() {
    let mut grid = Grid::new(2, 2);
    grid.set_rows(0);
}

#[test]
fn failed_setter_leaves_grid_untouched() {
    let mut grid = Grid::new(2, 3);

    assert!(grid.try_set_columns(0).is_err());
    assert_eq!(grid.columns(), 2);

    grid.try_set_columns(4).unwrap();
    assert_eq!(grid.columns(), 4);
}

#[test]
fn grid_from_tuple() {
    let grid = Grid::try_from((3, 2)).unwrap();
    assert_eq!((grid.columns(), grid.rows()), (3, 2));
    assert!(Grid::try_from((0, 0)).is_err());
}

#[test]
fn vertical_cells_divide_visible_area() {
    let layout = GridLayout::new(Grid::new(2, 3));

    assert_eq!(
        layout.cell_size(Size::new(300.0, 300.0)),
        Size::new(150.0, 100.0)
    );
}

#[test]
fn vertical_cells_subtract_spacing() {
    let layout = GridLayout::new(Grid::new(2, 3))
        .interitem_spacing(10.0)
        .line_spacing(15.0);

    // (300 - 10) / 2, (300 - 2 * 15) / 3
    assert_eq!(
        layout.cell_size(Size::new(300.0, 300.0)),
        Size::new(145.0, 90.0)
    );
}

#[test]
fn single_column_ignores_interitem_spacing() {
    let layout = GridLayout::new(Grid::new(1, 1))
        .interitem_spacing(25.0)
        .line_spacing(25.0);

    assert_eq!(
        layout.cell_size(Size::new(120.0, 80.0)),
        Size::new(120.0, 80.0)
    );
}

#[test]
fn negative_spacing_is_clamped() {
    let layout = GridLayout::new(Grid::new(3, 2))
        .interitem_spacing(-10.0)
        .line_spacing(-4.0);

    assert_eq!(
        layout.cell_size(Size::new(300.0, 100.0)),
        Size::new(100.0, 50.0)
    );
}

// Horizontal grids bind line spacing to (rows - 1) across the width and
// interitem spacing to (columns - 1) down the height. This is the documented
// mapping even though it is not a transpose of the vertical case.
#[test]
fn horizontal_cells_use_literal_axis_mapping() {
    let layout = GridLayout::new(Grid::new(2, 3))
        .interitem_spacing(10.0)
        .line_spacing(6.0)
        .scroll_direction(ScrollDirection::Horizontal);

    // width = (300 - (3 - 1) * 6) / 2, height = (300 - (2 - 1) * 10) / 3
    let cell = layout.cell_size(Size::new(300.0, 300.0));
    assert_eq!(cell.width, 144.0);
    assert!((cell.height - 290.0 / 3.0).abs() < 1e-4);
}

#[test]
fn horizontal_without_spacing_matches_vertical() {
    let grid = Grid::new(4, 2);
    let visible = Size::new(400.0, 200.0);

    assert_eq!(
        GridLayout::new(grid)
            .scroll_direction(ScrollDirection::Horizontal)
            .cell_size(visible),
        GridLayout::new(grid).cell_size(visible)
    );
}
