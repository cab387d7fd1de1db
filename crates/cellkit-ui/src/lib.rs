//! UI components for Cellkit
//!
//! Leaf items, padded boxes, and the list, grid, and carousel collection
//! containers. Every component implements [`Component`]; containers hold
//! children as [`ComponentRef`]s and impose a content mode on each child
//! right before rendering it.

pub mod layout;
pub mod widgets;

pub use widgets::*;

pub use cellkit_foundation::{
    component_ref, same_component, CollectionComponent, CollectionContext, CollectionEngine,
    CollectionError, Component, ComponentRef, FlowSurface, HostSurface, IndexPath, ItemView,
    ListCollectionComponent, ViewHandle,
};
pub use cellkit_ui_graphics::{Color, EdgeInsets, Point, Rect, Size};
pub use cellkit_ui_layout::{
    ContentMode, FlowLayout, Grid, GridLayout, LayoutError, ScrollDirection,
};

pub mod prelude {
    pub use crate::widgets::{
        BoxComponent, CarouselComponent, GridComponent, ItemComponent, ListComponent,
    };
    pub use cellkit_foundation::prelude::*;
    pub use cellkit_ui_graphics::{Color, EdgeInsets, Point, Rect, Size};
    pub use cellkit_ui_layout::prelude::*;
}
