/// Direction in which a host surface scrolls its items.
///
/// Flow layouts fill the axis orthogonal to the scroll direction first, then
/// advance along the scroll direction one line at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollDirection {
    /// Lines run left to right and stack top to bottom.
    #[default]
    Vertical,

    /// Lines run top to bottom and stack left to right.
    Horizontal,
}
