use super::*;
use cellkit_foundation::{CollectionComponent, IndexPath};
use cellkit_testing::{RecordingSurface, StubComponent, SurfaceEvent};
use cellkit_ui_graphics::Rect;

fn cell_frame(item: &ComponentRef) -> Option<Rect> {
    item.borrow().view().superview().map(|cell| cell.frame())
}

fn rows(heights: &[f32]) -> Vec<ComponentRef> {
    heights
        .iter()
        .map(|height| {
            StubComponent::automatic(Size::ZERO)
                .with_natural_height(*height)
                .into_shared()
                .0
        })
        .collect()
}

#[test]
fn header_width_is_forced_to_the_list_width() {
    let (header, log) = StubComponent::fixed(Size::new(100.0, 100.0)).into_shared();
    let mut list = ListComponent::new(ContentMode::fixed(Size::new(500.0, 800.0)));
    list.set_header(Some(header.clone()));

    list.render();

    assert_eq!(header.borrow().view().size(), Size::new(500.0, 100.0));
    assert_eq!(
        log.last_mode(),
        Some(ContentMode::automatic(Size::new(500.0, 100.0)))
    );
}

#[test]
fn footer_keeps_its_declared_height_across_renders() {
    let (footer, _) = StubComponent::fixed(Size::new(10.0, 24.0)).into_shared();
    let mut list = ListComponent::new(ContentMode::fixed(Size::new(320.0, 480.0)));
    list.set_footer(Some(footer.clone()));

    list.render();
    list.render();

    assert_eq!(footer.borrow().view().size(), Size::new(320.0, 24.0));
}

#[test]
fn rows_take_the_list_width_and_their_own_height() {
    let items = rows(&[30.0, 50.0]);
    let (header, _) = StubComponent::fixed(Size::new(1.0, 40.0)).into_shared();
    let mut list = ListComponent::new(ContentMode::fixed(Size::new(500.0, 800.0)));
    list.set_header(Some(header));
    list.set_item_components(items.clone());

    list.render();

    assert_eq!(cell_frame(&items[0]), Some(Rect::new(0.0, 40.0, 500.0, 30.0)));
    assert_eq!(cell_frame(&items[1]), Some(Rect::new(0.0, 70.0, 500.0, 50.0)));
}

#[test]
fn row_width_injection_keeps_the_variant() {
    let (row, log) = StubComponent::fixed(Size::new(10.0, 44.0)).into_shared();
    let mut list = ListComponent::new(ContentMode::fixed(Size::new(500.0, 800.0)));
    list.set_item_components(vec![row]);

    list.render();

    assert_eq!(
        log.last_mode(),
        Some(ContentMode::fixed(Size::new(500.0, 44.0)))
    );
}

#[test]
fn fixed_list_keeps_its_size() {
    let mut list = ListComponent::new(ContentMode::fixed(Size::new(500.0, 200.0)));
    list.set_item_components(rows(&[150.0, 150.0]));

    list.render();

    assert_eq!(list.preferred_content_size(), Size::new(500.0, 200.0));
}

#[test]
fn automatic_list_grows_to_its_content() {
    let (header, _) = StubComponent::fixed(Size::new(1.0, 40.0)).into_shared();
    let (footer, _) = StubComponent::fixed(Size::new(1.0, 20.0)).into_shared();
    let mut list = ListComponent::new(ContentMode::automatic(Size::new(500.0, 0.0)));
    list.set_header(Some(header));
    list.set_footer(Some(footer));
    list.set_item_components(rows(&[30.0, 50.0]));

    list.render();

    assert_eq!(list.preferred_content_size(), Size::new(500.0, 140.0));
}

#[test]
fn every_row_is_sized_before_the_list_resolves() {
    let surface = RecordingSurface::new();
    let log = surface.log();
    let mut list = ListComponent::with_surface(
        ContentMode::automatic(Size::new(300.0, 0.0)),
        Box::new(surface),
    );
    list.set_item_components(rows(&[10.0, 10.0, 10.0]));

    list.render();

    let sized = log.sized_items();
    assert_eq!(
        sized,
        vec![
            IndexPath::new(0, 0),
            IndexPath::new(0, 1),
            IndexPath::new(0, 2)
        ]
    );
    let last_size = log.position(&SurfaceEvent::SizeOfItem(IndexPath::new(0, 2)));
    let content = log.position(&SurfaceEvent::ContentSize(Size::new(300.0, 30.0)));
    assert!(matches!((last_size, content), (Some(sized), Some(resolved)) if sized < resolved));
}

#[test]
fn removing_the_header_detaches_its_view() {
    let (header, _) = StubComponent::fixed(Size::new(1.0, 40.0)).into_shared();
    let mut list = ListComponent::new(ContentMode::fixed(Size::new(200.0, 200.0)));
    list.set_header(Some(header.clone()));
    list.render();

    list.set_header(None);
    list.render();

    assert!(list.header().is_none());
    assert!(header.borrow().view().superview().is_none());
}
