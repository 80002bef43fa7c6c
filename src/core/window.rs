//! Axis-aligned update window in costmap cell coordinates.
//!
//! [`Window`] is the per-call rectangle a layer is asked to update.
//! Coordinates are inclusive-exclusive: the window covers cells with
//! `min_x <= x < max_x` and `min_y <= y < max_y`.

use serde::{Deserialize, Serialize};

/// Axis-aligned cell rectangle, inclusive-exclusive.
///
/// Windows are ephemeral: the host computes one per update cycle and the
/// layer never stores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Leftmost column (inclusive).
    pub min_x: usize,
    /// Bottom row (inclusive).
    pub min_y: usize,
    /// Rightmost column (exclusive).
    pub max_x: usize,
    /// Top row (exclusive).
    pub max_y: usize,
}

impl Window {
    /// Create a new window from corner coordinates.
    #[inline]
    pub const fn new(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Window covering a full `width` x `height` grid.
    #[inline]
    pub const fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width in cells (zero if degenerate).
    #[inline]
    pub fn width(&self) -> usize {
        self.max_x.saturating_sub(self.min_x)
    }

    /// Height in cells (zero if degenerate).
    #[inline]
    pub fn height(&self) -> usize {
        self.max_y.saturating_sub(self.min_y)
    }

    /// Number of cells covered.
    #[inline]
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Check if the window covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Check if the window lies inside a `width` x `height` grid.
    #[inline]
    pub fn contained_in(&self, width: usize, height: usize) -> bool {
        self.max_x <= width && self.max_y <= height
    }

    /// Check if a cell is inside the window.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }
}
