use super::*;
use cellkit_testing::StubComponent;
use cellkit_ui_graphics::Rect;

fn context(bounds: Size) -> CollectionContext {
    CollectionContext {
        content_mode: ContentMode::fixed(bounds),
        bounds,
        visible_rect: Rect::from_size(bounds),
    }
}

#[test]
fn list_rows_report_list_width_and_rendered_height() {
    let mut row = StubComponent::automatic(Size::new(1.0, 1.0)).with_natural_height(42.0);

    let size = ListRowPolicy.size_for_item(
        &context(Size::new(375.0, 600.0)),
        IndexPath::new(0, 0),
        &mut row,
    );

    assert_eq!(size, Size::new(375.0, 42.0));
    assert_eq!(row.log().renders(), 1);
}

#[test]
fn uniform_cells_override_any_mode() {
    let mut policy = UniformCellPolicy::new(Size::new(50.0, 25.0));
    let mut item = StubComponent::automatic(Size::new(500.0, 500.0));

    policy.materialize(&context(Size::ZERO), IndexPath::new(0, 0), &mut item);

    assert_eq!(item.content_mode(), ContentMode::fixed(Size::new(50.0, 25.0)));
}

#[test]
fn stretch_picks_the_axis_from_the_scroll_direction() {
    let requested = Size::new(80.0, 40.0);
    let visible = Size::new(300.0, 120.0);

    assert_eq!(
        StretchPolicy::new(ScrollDirection::Vertical).stretched(requested, visible),
        Size::new(80.0, 120.0)
    );
    assert_eq!(
        StretchPolicy::new(ScrollDirection::Horizontal).stretched(requested, visible),
        Size::new(300.0, 40.0)
    );
}
