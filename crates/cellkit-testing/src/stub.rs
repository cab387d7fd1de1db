//! Components that record how they are driven.

use cellkit_foundation::{component_ref, Component, ComponentRef, ViewHandle};
use cellkit_ui_graphics::Size;
use cellkit_ui_layout::ContentMode;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared record of every render a [`StubComponent`] went through.
#[derive(Clone, Debug, Default)]
pub struct StubLog {
    modes: Rc<RefCell<Vec<ContentMode>>>,
}

impl StubLog {
    /// Number of renders so far.
    pub fn renders(&self) -> usize {
        self.modes.borrow().len()
    }

    /// The content mode in effect at each render, oldest first.
    pub fn modes(&self) -> Vec<ContentMode> {
        self.modes.borrow().clone()
    }

    pub fn last_mode(&self) -> Option<ContentMode> {
        self.modes.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.modes.borrow_mut().clear();
    }

    fn record(&self, mode: ContentMode) {
        self.modes.borrow_mut().push(mode);
    }
}

/// A component whose measurement is fully predictable.
///
/// Under `Fixed` it takes the fixed size. Under `Automatic` it takes the
/// estimate, except for the height when a natural height is configured, which
/// is how wrapping content behaves once its width is known.
#[derive(Debug)]
pub struct StubComponent {
    mode: ContentMode,
    view: ViewHandle,
    natural_height: Option<f32>,
    log: StubLog,
}

impl StubComponent {
    pub fn new(mode: ContentMode) -> Self {
        Self {
            mode,
            view: ViewHandle::new(),
            natural_height: None,
            log: StubLog::default(),
        }
    }

    pub fn fixed(size: Size) -> Self {
        Self::new(ContentMode::fixed(size))
    }

    pub fn automatic(estimated_size: Size) -> Self {
        Self::new(ContentMode::automatic(estimated_size))
    }

    pub fn with_natural_height(mut self, height: f32) -> Self {
        self.natural_height = Some(height);
        self
    }

    pub fn log(&self) -> StubLog {
        self.log.clone()
    }

    /// Wraps the stub into a shared handle and returns it with its log.
    pub fn into_shared(self) -> (ComponentRef, StubLog) {
        let log = self.log();
        (component_ref(self), log)
    }
}

impl Component for StubComponent {
    fn content_mode(&self) -> ContentMode {
        self.mode
    }

    fn set_content_mode(&mut self, mode: ContentMode) {
        self.mode = mode;
    }

    fn render(&mut self) {
        self.log.record(self.mode);
        let size = match self.mode {
            ContentMode::Fixed { size } => size,
            ContentMode::Automatic { estimated_size } => match self.natural_height {
                Some(height) => estimated_size.with_height(height),
                None => estimated_size,
            },
        };
        self.view.set_size(size);
    }

    fn view(&self) -> &ViewHandle {
        &self.view
    }
}
