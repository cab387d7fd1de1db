//! Testing utilities and harness for Cellkit
//!
//! Leaf views with deterministic intrinsic sizes, components that record how
//! their parents drive them, and a host surface that records the callbacks it
//! makes.

pub mod assertions;
mod leaves;
mod recording_surface;
mod stub;

pub use leaves::*;
pub use recording_surface::*;
pub use stub::*;

pub mod prelude {
    pub use crate::assertions::{assert_approx_eq, assert_rect_approx_eq, assert_size_approx_eq};
    pub use crate::leaves::{IntrinsicView, TextView, GLYPH_WIDTH, LINE_HEIGHT};
    pub use crate::recording_surface::{RecordingSurface, SurfaceEvent, SurfaceLog};
    pub use crate::stub::{StubComponent, StubLog};
}
