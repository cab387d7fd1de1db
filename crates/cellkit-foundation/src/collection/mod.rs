//! Lazily materialized collections of components.
//!
//! A collection container never builds its children up front. The host
//! surface enumerates index paths during its layout pass and the engine asks
//! the owner's [`ItemProvider`] for each one the first time it is visited in a
//! render pass. The resulting components live in a [`MaterializationCache`]
//! until the next render clears it.

mod cache;
mod engine;
mod policy;
mod provider;

pub use cache::*;
pub use engine::*;
pub use policy::*;
pub use provider::*;

use crate::{CollectionError, Component, ComponentRef, IndexPath};
use std::rc::Rc;

/// Components whose children come from providers.
pub trait CollectionComponent: Component {
    fn number_of_sections(&self) -> usize;

    fn set_number_of_sections(&mut self, sections: usize);

    /// Items in `section` as reported by the number-of-items provider, or
    /// zero when none has been set.
    fn number_of_items(&mut self, section: usize) -> usize;

    fn set_number_of_items(&mut self, provider: NumberOfItemsProvider);

    /// The component at `index_path`, materializing it on first access in
    /// the current render pass.
    fn try_item_component(
        &mut self,
        index_path: IndexPath,
    ) -> Result<ComponentRef, CollectionError>;

    /// Like [`try_item_component`](Self::try_item_component).
    ///
    /// # Panics
    ///
    /// Panics if no item provider has been set.
    fn item_component(&mut self, index_path: IndexPath) -> ComponentRef {
        match self.try_item_component(index_path) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    fn set_item_provider(&mut self, provider: ItemProvider);

    /// Serves a single section straight from `items`.
    fn set_item_components(&mut self, items: Vec<ComponentRef>) {
        let count = items.len();
        self.set_number_of_sections(1);
        self.set_number_of_items(Box::new(move |_: &CollectionContext, _: usize| count));
        self.set_item_provider(Box::new(move |_: &CollectionContext, index_path: IndexPath| {
            Rc::clone(&items[index_path.item])
        }));
    }
}

/// Collections that frame their items with a header and a footer.
pub trait ListCollectionComponent: CollectionComponent {
    fn header(&self) -> Option<&ComponentRef>;

    fn set_header(&mut self, header: Option<ComponentRef>);

    fn footer(&self) -> Option<&ComponentRef>;

    fn set_footer(&mut self, footer: Option<ComponentRef>);
}
