//! UI components

/// Forwards the collection capability of a container to its `engine` field.
macro_rules! delegate_collection_component {
    ($container:ty) => {
        impl cellkit_foundation::CollectionComponent for $container {
            fn number_of_sections(&self) -> usize {
                cellkit_foundation::CollectionComponent::number_of_sections(&self.engine)
            }

            fn set_number_of_sections(&mut self, sections: usize) {
                cellkit_foundation::CollectionComponent::set_number_of_sections(
                    &mut self.engine,
                    sections,
                );
            }

            fn number_of_items(&mut self, section: usize) -> usize {
                cellkit_foundation::CollectionComponent::number_of_items(&mut self.engine, section)
            }

            fn set_number_of_items(&mut self, provider: cellkit_foundation::NumberOfItemsProvider) {
                cellkit_foundation::CollectionComponent::set_number_of_items(
                    &mut self.engine,
                    provider,
                );
            }

            fn try_item_component(
                &mut self,
                index_path: cellkit_foundation::IndexPath,
            ) -> Result<cellkit_foundation::ComponentRef, cellkit_foundation::CollectionError> {
                cellkit_foundation::CollectionComponent::try_item_component(
                    &mut self.engine,
                    index_path,
                )
            }

            fn set_item_provider(&mut self, provider: cellkit_foundation::ItemProvider) {
                cellkit_foundation::CollectionComponent::set_item_provider(
                    &mut self.engine,
                    provider,
                );
            }
        }
    };
}

pub mod box_widget;
pub mod carousel;
pub mod grid;
pub mod item;
pub mod list;

pub use box_widget::*;
pub use carousel::*;
pub use grid::*;
pub use item::*;
pub use list::*;
