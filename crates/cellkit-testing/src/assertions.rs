//! Assertion helpers for laid-out geometry.

use cellkit_ui_graphics::{Rect, Size};

/// Assert that a value is within `tolerance` of the expected one.
///
/// Geometry divides by column and row counts, so exact float comparison is
/// only safe for values chosen to divide evenly.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_size_approx_eq(actual: Size, expected: Size, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.width, expected.width, tolerance, &format!("{} - width", msg));
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_size_approx_eq(actual.size(), expected.size(), tolerance, msg);
}
