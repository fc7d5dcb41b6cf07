//! Pixel rectangle produced by the crop calculation
//!
//! Coordinates follow the usual image convention where (0,0) is the top-left
//! corner. The rectangle is half-open: `x1`/`y1` are the first column/row
//! past the right/bottom edge. Corners may lie outside the source image, or
//! even be negative, when the target area extends beyond it.

use std::fmt;

/// Rectangle in pixel space, `[x0, x1) x [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge (inclusive)
    pub x0: i64,
    /// Top edge (inclusive)
    pub y0: i64,
    /// Right edge (exclusive)
    pub x1: i64,
    /// Bottom edge (exclusive)
    pub y1: i64,
}

impl PixelRect {
    /// Create a new pixel rectangle from its edges
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        PixelRect { x0, y0, x1, y1 }
    }

    /// Width in pixels; zero or negative for a degenerate rectangle
    ///
    /// Saturates at the `i64` limits.
    pub fn width(&self) -> i64 {
        self.x1.saturating_sub(self.x0)
    }

    /// Height in pixels; zero or negative for a degenerate rectangle
    ///
    /// Saturates at the `i64` limits.
    pub fn height(&self) -> i64 {
        self.y1.saturating_sub(self.y0)
    }

    /// Whether the rectangle covers no pixels at all
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Whether the rectangle overlaps an image of the given size
    pub fn intersects_image(&self, dims: (u32, u32)) -> bool {
        !self.is_empty()
            && self.x0 < dims.0 as i64 && self.y0 < dims.1 as i64
            && self.x1 > 0 && self.y1 > 0
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}
