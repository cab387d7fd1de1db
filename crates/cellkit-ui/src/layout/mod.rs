//! Item layout policies of the collection containers.

pub mod policies;

pub use policies::*;
