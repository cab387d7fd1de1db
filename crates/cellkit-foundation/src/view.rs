//! Minimal retained view tree.
//!
//! Components render into views; containers arrange their children's views.
//! A [`ViewHandle`] is a cheap clone of a shared node. Parents own their
//! subviews, children keep a weak link back so re-parenting detaches them.

use cellkit_ui_graphics::{Color, Point, Rect, Size};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier of a view, unique for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    fn next() -> Self {
        Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

struct ViewNode {
    id: ViewId,
    frame: Rect,
    background_color: Color,
    subviews: Vec<ViewHandle>,
    superview: Weak<RefCell<ViewNode>>,
}

/// Shared handle to a node in the view tree.
#[derive(Clone)]
pub struct ViewHandle {
    inner: Rc<RefCell<ViewNode>>,
}

impl ViewHandle {
    pub fn new() -> Self {
        Self::with_frame(Rect::ZERO)
    }

    pub fn with_frame(frame: Rect) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewNode {
                id: ViewId::next(),
                frame,
                background_color: Color::CLEAR,
                subviews: Vec::new(),
                superview: Weak::new(),
            })),
        }
    }

    pub fn id(&self) -> ViewId {
        self.inner.borrow().id
    }

    pub fn ptr_eq(&self, other: &ViewHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn frame(&self) -> Rect {
        self.inner.borrow().frame
    }

    pub fn set_frame(&self, frame: Rect) {
        self.inner.borrow_mut().frame = frame;
    }

    /// Size of the frame; equal to the bounds size since views never scale.
    pub fn size(&self) -> Size {
        self.frame().size()
    }

    pub fn set_size(&self, size: Size) {
        let mut node = self.inner.borrow_mut();
        node.frame = node.frame.with_size(size);
    }

    pub fn origin(&self) -> Point {
        self.frame().origin()
    }

    pub fn set_origin(&self, origin: Point) {
        let mut node = self.inner.borrow_mut();
        node.frame = node.frame.with_origin(origin);
    }

    pub fn background_color(&self) -> Color {
        self.inner.borrow().background_color
    }

    pub fn set_background_color(&self, color: Color) {
        self.inner.borrow_mut().background_color = color;
    }

    pub fn subviews(&self) -> Vec<ViewHandle> {
        self.inner.borrow().subviews.clone()
    }

    pub fn superview(&self) -> Option<ViewHandle> {
        self.inner
            .borrow()
            .superview
            .upgrade()
            .map(|inner| ViewHandle { inner })
    }

    pub fn contains_subview(&self, view: &ViewHandle) -> bool {
        self.inner
            .borrow()
            .subviews
            .iter()
            .any(|subview| subview.ptr_eq(view))
    }

    /// Appends `view` as the topmost subview, detaching it from any previous parent.
    pub fn add_subview(&self, view: &ViewHandle) {
        if self.ptr_eq(view) {
            return;
        }
        view.remove_from_superview();
        view.inner.borrow_mut().superview = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().subviews.push(view.clone());
    }

    pub fn remove_from_superview(&self) {
        let parent = self.inner.borrow().superview.upgrade();
        if let Some(parent) = parent {
            parent
                .borrow_mut()
                .subviews
                .retain(|subview| !Rc::ptr_eq(&subview.inner, &self.inner));
        }
        self.inner.borrow_mut().superview = Weak::new();
    }

    pub fn remove_all_subviews(&self) {
        let subviews = std::mem::take(&mut self.inner.borrow_mut().subviews);
        for subview in subviews {
            subview.inner.borrow_mut().superview = Weak::new();
        }
    }

    /// Replaces every subview with `view`, pinned to this view's bounds.
    pub fn wrap_subview(&self, view: &ViewHandle) {
        self.remove_all_subviews();
        view.set_frame(Rect::from_size(self.size()));
        self.add_subview(view);
    }
}

impl Default for ViewHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.inner.borrow();
        f.debug_struct("ViewHandle")
            .field("id", &node.id)
            .field("frame", &node.frame)
            .field("subviews", &node.subviews.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
