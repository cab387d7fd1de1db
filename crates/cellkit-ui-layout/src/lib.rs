//! Layout contracts & geometry policies for Cellkit
//!
//! Everything in this crate is plain data plus the arithmetic that containers
//! use to size their children. Nothing here renders or owns a view.

mod content_mode;
mod error;
mod flow;
mod grid;
mod safe_area;
mod scroll_direction;

pub use content_mode::*;
pub use error::*;
pub use flow::*;
pub use grid::*;
pub use safe_area::*;
pub use scroll_direction::*;

pub mod prelude {
    pub use crate::content_mode::ContentMode;
    pub use crate::flow::FlowLayout;
    pub use crate::grid::{Grid, GridLayout};
    pub use crate::scroll_direction::ScrollDirection;
}
