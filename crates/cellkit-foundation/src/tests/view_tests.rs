use super::*;

#[test]
fn add_subview_sets_superview() {
    let parent = ViewHandle::new();
    let child = ViewHandle::new();

    parent.add_subview(&child);

    assert!(parent.contains_subview(&child));
    assert!(child.superview().is_some_and(|view| view.ptr_eq(&parent)));
}

#[test]
fn add_subview_reparents() {
    let first = ViewHandle::new();
    let second = ViewHandle::new();
    let child = ViewHandle::new();

    first.add_subview(&child);
    second.add_subview(&child);

    assert!(first.subviews().is_empty());
    assert_eq!(second.subviews().len(), 1);
    assert!(child.superview().is_some_and(|view| view.ptr_eq(&second)));
}

#[test]
fn adding_a_view_to_itself_is_ignored() {
    let view = ViewHandle::new();
    view.add_subview(&view);
    assert!(view.subviews().is_empty());
}

#[test]
fn remove_from_superview_detaches() {
    let parent = ViewHandle::new();
    let child = ViewHandle::new();
    parent.add_subview(&child);

    child.remove_from_superview();

    assert!(parent.subviews().is_empty());
    assert!(child.superview().is_none());
}

#[test]
fn wrap_subview_replaces_content_and_fills_bounds() {
    let cell = ViewHandle::with_frame(Rect::new(0.0, 40.0, 120.0, 30.0));
    let stale = ViewHandle::new();
    let content = ViewHandle::with_frame(Rect::new(5.0, 5.0, 10.0, 10.0));
    cell.add_subview(&stale);

    cell.wrap_subview(&content);

    assert!(stale.superview().is_none());
    assert_eq!(cell.subviews().len(), 1);
    assert_eq!(content.frame(), Rect::new(0.0, 0.0, 120.0, 30.0));
}

#[test]
fn size_and_origin_update_independently() {
    let view = ViewHandle::new();
    view.set_size(Size::new(44.0, 6.0));
    view.set_origin(Point::new(2.0, 1.0));

    assert_eq!(view.frame(), Rect::new(2.0, 1.0, 44.0, 6.0));
}

#[test]
fn view_ids_are_unique() {
    assert_ne!(ViewHandle::new().id(), ViewHandle::new().id());
}
