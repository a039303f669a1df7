#![forbid(unsafe_code)]

//! Geometric primitives for cell-grid layout.
//!
//! Coordinates are 0-indexed with the origin at the top-left, measured in
//! cells. Values are `i32` so invalid (negative) inputs can be detected and
//! rejected during validation; every rectangle produced by the layout engine
//! has non-negative fields.

use std::fmt;

/// A layout axis along which a stack splits its allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Lay out slots left-to-right.
    #[default]
    Horizontal,
    /// Lay out slots top-to-bottom.
    Vertical,
}

impl Axis {
    /// Short label for display ("horizontal" / "vertical").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }

    /// The extent of `size` along this axis.
    #[inline]
    #[must_use]
    pub const fn extent_of(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A width/height pair in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A rectangle in the cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// The rectangle's size.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Check whether the rectangle covers zero cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check whether a point lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_extent_selection() {
        let size = Size::new(10, 5);
        assert_eq!(Axis::Horizontal.extent_of(size), 10);
        assert_eq!(Axis::Vertical.extent_of(size), 5);
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::new(3, 2, 7, 4);
        assert_eq!(rect.right(), 10);
        assert_eq!(rect.bottom(), 6);
        assert_eq!(rect.area(), 28);
        assert!(!rect.is_empty());
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(0, 0, 4, 4);
        assert!(rect.contains(0, 0));
        assert!(rect.contains(3, 3));
        assert!(!rect.contains(4, 0));
        assert!(!rect.contains(0, 4));
    }

    #[test]
    fn zero_extent_rect_is_empty() {
        assert!(Rect::new(5, 5, 0, 3).is_empty());
        assert!(Rect::new(5, 5, 3, 0).is_empty());
    }
}
