//! Visible area of a scrolling surface.

use cellkit_ui_graphics::{EdgeInsets, Rect, Size};

/// The part of a surface's bounds items may occupy.
///
/// Content insets and safe-area insets are both removed from the bounds. Each
/// axis clamps at zero when the insets exceed the bounds.
pub fn visible_rect(bounds: Size, content_inset: EdgeInsets, safe_area_insets: EdgeInsets) -> Rect {
    let mut insets = content_inset;
    insets += safe_area_insets;
    Rect::from_size(bounds).inset_by(insets)
}

#[cfg(test)]
#[path = "tests/safe_area_tests.rs"]
mod tests;
