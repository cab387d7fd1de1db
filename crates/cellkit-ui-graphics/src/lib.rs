//! Pure math/data for Cellkit
//!
//! This crate contains the geometry primitives and color values shared by
//! every layer of the component tree: sizes negotiated through content modes,
//! frames assigned to views, and padding insets.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
