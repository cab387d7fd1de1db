//! Content mode negotiated between a parent container and its children.

use cellkit_ui_graphics::Size;

/// Sizing policy a component renders under.
///
/// A parent writes the mode onto a child right before asking it to render.
/// `Fixed` pins the child to an exact size. `Automatic` hands the child an
/// estimate to measure against; the child reports its own natural size back
/// through its preferred content size.
///
/// Equality is structural: the variant and the carried size must both match,
/// so `Fixed(s) != Automatic(s)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContentMode {
    Fixed { size: Size },
    Automatic { estimated_size: Size },
}

impl ContentMode {
    pub const fn fixed(size: Size) -> Self {
        ContentMode::Fixed { size }
    }

    pub const fn automatic(estimated_size: Size) -> Self {
        ContentMode::Automatic { estimated_size }
    }

    /// The size carried by either variant: the exact size or the estimate.
    ///
    /// Containers use this as their initial frame before measuring anything.
    pub fn size(&self) -> Size {
        match *self {
            ContentMode::Fixed { size } => size,
            ContentMode::Automatic { estimated_size } => estimated_size,
        }
    }

    /// Keeps the variant and swaps the carried size.
    pub fn with_size(self, size: Size) -> Self {
        match self {
            ContentMode::Fixed { .. } => ContentMode::Fixed { size },
            ContentMode::Automatic { .. } => ContentMode::Automatic {
                estimated_size: size,
            },
        }
    }

    /// Keeps the variant and the carried height, replacing only the width.
    pub fn with_width(self, width: f32) -> Self {
        self.with_size(self.size().with_width(width))
    }

    /// Keeps the variant and the carried width, replacing only the height.
    pub fn with_height(self, height: f32) -> Self {
        self.with_size(self.size().with_height(height))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, ContentMode::Fixed { .. })
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self, ContentMode::Automatic { .. })
    }
}

/// Automatic with a zero estimate. Containers built this way render empty
/// until they are given a non-zero size.
impl Default for ContentMode {
    fn default() -> Self {
        ContentMode::Automatic {
            estimated_size: Size::ZERO,
        }
    }
}

#[cfg(test)]
#[path = "tests/content_mode_tests.rs"]
mod tests;
