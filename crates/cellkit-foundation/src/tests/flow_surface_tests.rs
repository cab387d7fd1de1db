use super::*;

struct FixedSource {
    sections: Vec<Vec<Size>>,
    size_queries: Vec<IndexPath>,
    configured: Vec<IndexPath>,
}

impl FixedSource {
    fn new(sections: Vec<Vec<Size>>) -> Self {
        Self {
            sections,
            size_queries: Vec::new(),
            configured: Vec::new(),
        }
    }
}

impl SurfaceDataSource for FixedSource {
    fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    fn number_of_items(&mut self, section: usize) -> usize {
        self.sections[section].len()
    }

    fn size_of_item(&mut self, index_path: IndexPath) -> Size {
        self.size_queries.push(index_path);
        self.sections[index_path.section][index_path.item]
    }

    fn configure_cell(&mut self, _cell: &ViewHandle, index_path: IndexPath) {
        self.configured.push(index_path);
    }
}

fn surface_of(width: f32, height: f32, layout: FlowLayout) -> FlowSurface {
    let surface = FlowSurface::with_layout(layout);
    surface.view().set_size(Size::new(width, height));
    surface
}

#[test]
fn stacks_full_width_items_vertically() {
    let mut surface = surface_of(100.0, 400.0, FlowLayout::new().line_spacing(10.0));
    let mut source = FixedSource::new(vec![vec![Size::new(100.0, 30.0); 3]]);

    surface.reload_data(&mut source);
    surface.layout_if_needed(&mut source);

    let ys: Vec<f32> = surface.placed_items().iter().map(|p| p.frame.y).collect();
    assert_eq!(ys, vec![0.0, 40.0, 80.0]);
    assert_eq!(surface.content_size(), Size::new(100.0, 110.0));
    assert_eq!(surface.cells().len(), 3);
}

#[test]
fn wraps_items_that_overflow_the_line() {
    let layout = FlowLayout::new().interitem_spacing(10.0).line_spacing(5.0);
    let mut surface = surface_of(100.0, 400.0, layout);
    let mut source = FixedSource::new(vec![vec![Size::new(45.0, 20.0); 3]]);

    surface.layout_if_needed(&mut source);

    assert_eq!(
        surface.frame_for_item(IndexPath::new(0, 1)),
        Some(Rect::new(55.0, 0.0, 45.0, 20.0))
    );
    assert_eq!(
        surface.frame_for_item(IndexPath::new(0, 2)),
        Some(Rect::new(0.0, 25.0, 45.0, 20.0))
    );
    assert_eq!(surface.content_size().height, 45.0);
}

#[test]
fn one_item_per_line_stacks_items_that_would_fit_side_by_side() {
    let layout = FlowLayout::new()
        .one_item_per_line(true)
        .interitem_spacing(10.0)
        .line_spacing(5.0);
    let mut surface = surface_of(300.0, 400.0, layout);
    let mut source = FixedSource::new(vec![vec![Size::new(50.0, 20.0); 3]]);

    surface.layout_if_needed(&mut source);

    let origins: Vec<Point> = surface.placed_items().iter().map(|p| p.frame.origin()).collect();
    assert_eq!(
        origins,
        vec![Point::new(0.0, 0.0), Point::new(0.0, 25.0), Point::new(0.0, 50.0)]
    );
    assert_eq!(surface.content_size(), Size::new(300.0, 70.0));
}

#[test]
fn one_item_per_line_runs_along_x_when_scrolling_horizontally() {
    let layout = FlowLayout::new()
        .one_item_per_line(true)
        .line_spacing(4.0)
        .scroll_direction(ScrollDirection::Horizontal);
    let mut surface = surface_of(300.0, 100.0, layout);
    let mut source = FixedSource::new(vec![vec![Size::new(30.0, 20.0); 3]]);

    surface.layout_if_needed(&mut source);

    let xs: Vec<f32> = surface.placed_items().iter().map(|p| p.frame.x).collect();
    assert_eq!(xs, vec![0.0, 34.0, 68.0]);
    assert!(surface.placed_items().iter().all(|p| p.frame.y == 0.0));
}

#[test]
fn summation_drift_on_a_long_line_does_not_wrap() {
    let columns = 37;
    let spacing = 3.7;
    let width = 9999.0_f32;
    let cell = (width - (columns - 1) as f32 * spacing) / columns as f32;
    let layout = FlowLayout::new().interitem_spacing(spacing);
    let mut surface = surface_of(width, 500.0, layout);
    let mut source = FixedSource::new(vec![vec![Size::new(cell, 10.0); columns]]);

    surface.layout_if_needed(&mut source);

    assert!(surface.placed_items().iter().all(|p| p.frame.y == 0.0));
    assert_eq!(surface.content_size().height, 10.0);
}

#[test]
fn centers_short_items_within_their_line() {
    let mut surface = surface_of(100.0, 400.0, FlowLayout::new());
    let mut source = FixedSource::new(vec![vec![Size::new(50.0, 40.0), Size::new(50.0, 20.0)]]);

    surface.layout_if_needed(&mut source);

    assert_eq!(surface.frame_for_item(IndexPath::new(0, 1)).map(|f| f.y), Some(10.0));
    assert_eq!(surface.content_size().height, 40.0);
}

#[test]
fn horizontal_flow_grows_content_width() {
    let layout = FlowLayout::new().scroll_direction(ScrollDirection::Horizontal);
    let mut surface = surface_of(100.0, 50.0, layout);
    let mut source = FixedSource::new(vec![vec![Size::new(80.0, 50.0); 2]]);

    surface.layout_if_needed(&mut source);

    assert_eq!(
        surface.frame_for_item(IndexPath::new(0, 1)),
        Some(Rect::new(80.0, 0.0, 80.0, 50.0))
    );
    assert_eq!(surface.content_size(), Size::new(160.0, 50.0));
}

#[test]
fn asks_for_every_size_before_configuring_cells() {
    let mut surface = surface_of(100.0, 400.0, FlowLayout::new());
    let mut source = FixedSource::new(vec![
        vec![Size::new(100.0, 10.0); 2],
        vec![Size::new(100.0, 10.0)],
    ]);

    surface.layout_if_needed(&mut source);

    let expected = vec![
        IndexPath::new(0, 0),
        IndexPath::new(0, 1),
        IndexPath::new(1, 0),
    ];
    assert_eq!(source.size_queries, expected);
    assert_eq!(source.configured, expected);
}

#[test]
fn layout_runs_once_until_invalidated() {
    let mut surface = surface_of(100.0, 400.0, FlowLayout::new());
    let mut source = FixedSource::new(vec![vec![Size::new(100.0, 10.0)]]);

    surface.layout_if_needed(&mut source);
    surface.layout_if_needed(&mut source);
    assert_eq!(source.size_queries.len(), 1);

    surface.invalidate_layout();
    surface.layout_if_needed(&mut source);
    assert_eq!(source.size_queries.len(), 2);
}

#[test]
fn section_insets_offset_items_and_extend_content() {
    let layout = FlowLayout::new().section_inset(EdgeInsets::from_components(5.0, 10.0, 5.0, 20.0));
    let mut surface = surface_of(100.0, 400.0, layout);
    let mut source = FixedSource::new(vec![vec![Size::new(90.0, 30.0)]]);

    surface.layout_if_needed(&mut source);

    assert_eq!(
        surface.frame_for_item(IndexPath::new(0, 0)),
        Some(Rect::new(5.0, 10.0, 90.0, 30.0))
    );
    assert_eq!(surface.content_size().height, 60.0);
}

#[test]
fn header_and_footer_bracket_the_items() {
    let mut surface = surface_of(100.0, 400.0, FlowLayout::new());
    let header = ViewHandle::with_frame(Rect::new(0.0, 0.0, 100.0, 25.0));
    let footer = ViewHandle::with_frame(Rect::new(0.0, 0.0, 100.0, 15.0));
    surface.set_header_view(Some(header.clone()));
    surface.set_footer_view(Some(footer.clone()));
    let mut source = FixedSource::new(vec![vec![Size::new(100.0, 50.0)]]);

    surface.layout_if_needed(&mut source);

    assert_eq!(surface.frame_for_item(IndexPath::new(0, 0)).map(|f| f.y), Some(25.0));
    assert_eq!(footer.origin(), Point::new(0.0, 75.0));
    assert_eq!(surface.content_size().height, 90.0);
    assert!(surface.view().contains_subview(&header));
    assert!(surface.view().contains_subview(&footer));
}

#[test]
fn reload_detaches_stale_cells() {
    let mut surface = surface_of(100.0, 400.0, FlowLayout::new());
    let mut source = FixedSource::new(vec![vec![Size::new(100.0, 10.0); 3]]);
    surface.layout_if_needed(&mut source);
    let last = surface.cells()[2].clone();

    let mut shorter = FixedSource::new(vec![vec![Size::new(100.0, 10.0)]]);
    surface.reload_data(&mut shorter);
    surface.layout_if_needed(&mut shorter);

    assert_eq!(surface.cells().len(), 1);
    assert!(last.superview().is_none());
}

#[test]
fn visible_rect_excludes_insets() {
    let mut surface = surface_of(100.0, 200.0, FlowLayout::new());
    surface.set_content_inset(EdgeInsets::symmetric(10.0, 0.0));
    surface.set_safe_area_insets(EdgeInsets::from_components(0.0, 20.0, 0.0, 0.0));

    assert_eq!(surface.visible_rect().size(), Size::new(80.0, 180.0));
}
