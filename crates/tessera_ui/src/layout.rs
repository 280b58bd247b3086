//! Screen-space rectangles and the tile grid they come from.

/// A rectangle in screen coordinates (pixels, top-left origin).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Square cell `(column, row)` of a grid with `size`-pixel cells,
    /// offset by `origin`.
    #[must_use]
    pub fn grid_cell(origin: (f32, f32), column: u32, row: u32, size: f32) -> Self {
        Self::new(origin.0 + column as f32 * size, origin.1 + row as f32 * size, size, size)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
