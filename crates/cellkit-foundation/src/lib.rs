//! Component protocol, view tree, and collection engine for Cellkit
//!
//! A component owns a view, renders it under a [`ContentMode`] imposed by its
//! parent, and reports the size it ended up with. Collection containers
//! materialize their children lazily through a [`CollectionEngine`] that a
//! [`HostSurface`] drives during its own layout pass.

pub mod collection;
pub mod collections;
mod component;
mod error;
mod index_path;
pub mod surface;
mod view;

pub use collection::*;
pub use component::*;
pub use error::*;
pub use index_path::*;
pub use surface::*;
pub use view::*;

pub use cellkit_ui_graphics::{Color, EdgeInsets, Point, Rect, Size};
pub use cellkit_ui_layout::{ContentMode, FlowLayout, ScrollDirection};

pub mod prelude {
    pub use crate::collection::{
        CollectionComponent, CollectionContext, CollectionEngine, ItemLayoutPolicy,
        ListCollectionComponent,
    };
    pub use crate::component::{component_ref, same_component, Component, ComponentRef, ItemView};
    pub use crate::index_path::IndexPath;
    pub use crate::surface::{FlowSurface, HostSurface, SurfaceDataSource};
    pub use crate::view::ViewHandle;
}
