//! Host costmap storage.
//!
//! A minimal 2D costmap: one byte per cell, row-major, with the standard
//! sentinel cost values. Layers receive windowed views into it and write
//! only inside their declared window.

use crate::core::Window;
use crate::error::{DenoiseError, Result};

use super::raster::{RasterView, RasterViewMut};

/// Cost value of a cell known to be free.
pub const FREE_SPACE: u8 = 0;

/// Cost value of a definite obstacle.
pub const LETHAL_OBSTACLE: u8 = 255;

/// 2D byte costmap with row-major storage.
///
/// Cell (x, y) lives at index `y * width + x`. Values other than
/// [`FREE_SPACE`] and [`LETHAL_OBSTACLE`] (inflation, unknown, etc.) are
/// carried through untouched by every layer in this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Costmap {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Costmap {
    /// Create a costmap with every cell free.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![FREE_SPACE; width * height],
            width,
            height,
        }
    }

    /// Create a costmap from an existing row-major cell buffer.
    ///
    /// # Panics
    /// Panics if `cells.len() != width * height`.
    pub fn from_cells(cells: Vec<u8>, width: usize, height: usize) -> Self {
        assert_eq!(
            cells.len(),
            width * height,
            "costmap buffer length mismatch"
        );
        Self {
            cells,
            width,
            height,
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Cost at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Set the cost at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cost: u8) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cost;
        }
    }

    /// Flat row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Count cells holding `cost` inside `window`.
    pub fn count_in_window(&self, window: Window, cost: u8) -> usize {
        let mut count = 0;
        for y in window.min_y..window.max_y.min(self.height) {
            for x in window.min_x..window.max_x.min(self.width) {
                if self.cells[y * self.width + x] == cost {
                    count += 1;
                }
            }
        }
        count
    }

    /// Read-only view of a window.
    ///
    /// Fails with [`DenoiseError::WindowOutOfBounds`] if the window
    /// escapes the grid.
    pub fn window(&self, window: Window) -> Result<RasterView<'_, u8>> {
        let (start, end) = self.window_range(window)?;
        Ok(RasterView::from_parts(
            &self.cells[start..end],
            window.width(),
            window.height(),
            self.width,
        ))
    }

    /// Mutable view of a window.
    pub fn window_mut(&mut self, window: Window) -> Result<RasterViewMut<'_, u8>> {
        let (start, end) = self.window_range(window)?;
        Ok(RasterViewMut::from_parts(
            &mut self.cells[start..end],
            window.width(),
            window.height(),
            self.width,
        ))
    }

    /// Flat index range backing a window view. Empty windows map to an
    /// empty range.
    fn window_range(&self, window: Window) -> Result<(usize, usize)> {
        if !window.contained_in(self.width, self.height) {
            return Err(DenoiseError::WindowOutOfBounds {
                window,
                width: self.width,
                height: self.height,
            });
        }
        if window.is_empty() {
            return Ok((0, 0));
        }
        let start = window.min_y * self.width + window.min_x;
        let end = start + (window.height() - 1) * self.width + window.width();
        Ok((start, end))
    }
}
