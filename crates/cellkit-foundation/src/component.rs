//! The component capability set shared by leaves, decorators, and collections.

use crate::ViewHandle;
use cellkit_ui_graphics::Size;
use cellkit_ui_layout::ContentMode;
use std::cell::RefCell;
use std::rc::Rc;

/// A self-measuring, self-rendering unit of the tree.
///
/// Parents may overwrite a child's content mode right before rendering it.
/// After [`render`](Component::render) returns, the preferred content size
/// reflects the laid-out size of the view; before the first render it is
/// whatever the view was created with (usually zero).
///
/// Rendering is synchronous and must happen on the thread that owns the views.
pub trait Component {
    fn content_mode(&self) -> ContentMode;

    fn set_content_mode(&mut self, mode: ContentMode);

    fn render(&mut self);

    fn view(&self) -> &ViewHandle;

    fn preferred_content_size(&self) -> Size {
        self.view().size()
    }
}

/// Shared, single-threaded handle to a component.
///
/// Collection providers hand these out so the owner can keep talking to the
/// same instance the container renders.
pub type ComponentRef = Rc<RefCell<dyn Component>>;

/// Wraps a component into a [`ComponentRef`].
pub fn component_ref<C: Component + 'static>(component: C) -> ComponentRef {
    Rc::new(RefCell::new(component))
}

/// Reference identity between two component handles, ignoring vtables.
pub fn same_component<A: ?Sized, B: ?Sized>(a: &Rc<RefCell<A>>, b: &Rc<RefCell<B>>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Leaf content hosted by an item component.
///
/// `size_that_fits` reports the natural size of the content when it is
/// allowed up to `constraint`. Content without an intrinsic size returns
/// zero, and the item component falls back to its estimate on that axis.
pub trait ItemView {
    fn view(&self) -> &ViewHandle;

    fn size_that_fits(&self, constraint: Size) -> Size {
        let _ = constraint;
        Size::ZERO
    }
}

/// A bare view has no intrinsic size.
impl ItemView for ViewHandle {
    fn view(&self) -> &ViewHandle {
        self
    }
}
