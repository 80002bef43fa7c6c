//! Row-major 2D buffers and the elementwise conversion primitive.
//!
//! [`Raster`] owns a flat `Vec<T>`; [`RasterView`] and [`RasterViewMut`]
//! borrow a rectangular region of some larger row-major buffer (a costmap
//! window, or a whole raster). [`convert`] applies a per-cell operation
//! between two equally-sized views, which is how the denoise pipeline
//! moves data between cost bytes, binary masks and label images.

use crate::error::{DenoiseError, Result};

/// Owned row-major 2D buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> Raster<T> {
    /// Create a raster with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }
}

impl<T> Raster<T> {
    /// Create a raster from an existing row-major buffer.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn from_vec(data: Vec<T>, width: usize, height: usize) -> Self {
        assert_eq!(data.len(), width * height, "raster buffer length mismatch");
        Self {
            data,
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

    /// Cell at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            Some(&self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Flat row-major contents.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Flat row-major contents, mutable.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Borrow the whole raster as a read-only view.
    #[inline]
    pub fn view(&self) -> RasterView<'_, T> {
        RasterView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Borrow the whole raster as a mutable view.
    #[inline]
    pub fn view_mut(&mut self) -> RasterViewMut<'_, T> {
        RasterViewMut {
            data: &mut self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}

/// Read-only rectangular view into a row-major buffer.
///
/// `stride` is the row pitch of the underlying buffer and may exceed
/// `width` when the view covers a window of a larger grid.
#[derive(Clone, Copy, Debug)]
pub struct RasterView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> RasterView<'a, T> {
    /// Create a view over `data` with an explicit row pitch.
    ///
    /// `data` must hold at least `(height - 1) * stride + width` elements
    /// when the view is non-empty.
    pub(crate) fn from_parts(data: &'a [T], width: usize, height: usize, stride: usize) -> Self {
        debug_assert!(width == 0 || height == 0 || data.len() >= (height - 1) * stride + width);
        Self {
            data,
            width,
            height,
            stride,
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

    /// (width, height) pair.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row `y` as a contiguous slice.
    ///
    /// Zero-width views have empty rows regardless of `y`; their backing
    /// slice is empty and must not be indexed.
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        if self.width == 0 {
            return &[];
        }
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
}

/// Mutable rectangular view into a row-major buffer.
#[derive(Debug)]
pub struct RasterViewMut<'a, T> {
    data: &'a mut [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> RasterViewMut<'a, T> {
    /// Create a mutable view over `data` with an explicit row pitch.
    pub(crate) fn from_parts(
        data: &'a mut [T],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Self {
        debug_assert!(width == 0 || height == 0 || data.len() >= (height - 1) * stride + width);
        Self {
            data,
            width,
            height,
            stride,
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

    /// (width, height) pair.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row `y` as a contiguous mutable slice.
    ///
    /// Zero-width views have empty rows regardless of `y`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        if self.width == 0 {
            return &mut [];
        }
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }
}

/// Apply `operation` to every (source, target) cell pair.
///
/// Traversal is row-major and visits every cell exactly once. Fails with
/// [`DenoiseError::DimensionMismatch`] before touching the target if the
/// views disagree on size; there are no partial writes.
pub fn convert<S, T, F>(
    source: RasterView<'_, S>,
    target: &mut RasterViewMut<'_, T>,
    mut operation: F,
) -> Result<()>
where
    F: FnMut(&S, &mut T),
{
    if source.dimensions() != target.dimensions() {
        return Err(DenoiseError::DimensionMismatch {
            expected_width: source.width(),
            expected_height: source.height(),
            actual_width: target.width(),
            actual_height: target.height(),
        });
    }

    for y in 0..source.height() {
        for (src, dst) in source.row(y).iter().zip(target.row_mut(y).iter_mut()) {
            operation(src, dst);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_raster() {
        let raster = Raster::filled(4, 3, 7u8);

        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.as_slice(), &[7; 12]);
        assert_eq!(raster.get(3, 2), Some(&7));
        assert_eq!(raster.get(4, 0), None);
    }

    #[test]
    fn test_convert_maps_every_cell() {
        let source = Raster::from_vec(vec![0u8, 1, 2, 3, 4, 5], 3, 2);
        let mut target = Raster::filled(3, 2, 0u32);

        convert(source.view(), &mut target.view_mut(), |&s, t| {
            *t = s as u32 * 10
        })
        .unwrap();

        assert_eq!(target.as_slice(), &[0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_convert_read_modify() {
        let selected = Raster::from_vec(vec![0u8, 1, 0, 1], 2, 2);
        let mut cells = Raster::from_vec(vec![9u8, 9, 9, 9], 2, 2);

        convert(selected.view(), &mut cells.view_mut(), |&sel, cell| {
            if sel != 0 {
                *cell = 0;
            }
        })
        .unwrap();

        assert_eq!(cells.as_slice(), &[9, 0, 9, 0]);
    }

    #[test]
    fn test_convert_dimension_mismatch() {
        let source = Raster::filled(5, 5, 0u8);
        let mut target = Raster::filled(4, 5, 1u8);

        let err = convert(source.view(), &mut target.view_mut(), |&s, t| *t = s).unwrap_err();

        assert!(matches!(err, DenoiseError::DimensionMismatch { .. }));
        // No partial writes.
        assert_eq!(target.as_slice(), &[1; 20]);
    }

    #[test]
    fn test_convert_empty() {
        let source: Raster<u8> = Raster::filled(0, 0, 0);
        let mut target: Raster<u8> = Raster::filled(0, 0, 0);

        convert(source.view(), &mut target.view_mut(), |&s, t| *t = s).unwrap();
    }

    #[test]
    fn test_convert_zero_width_nonzero_height() {
        // A degenerate view may have zero width but several rows; the
        // dimensions match, so the conversion succeeds visiting no cells.
        let data: [u8; 0] = [];
        let source = RasterView::from_parts(&data, 0, 2, 5);
        let mut target: Raster<u8> = Raster::filled(0, 2, 0);

        convert(source, &mut target.view_mut(), |&s, t| *t = s).unwrap();

        assert_eq!(source.row(1), &[] as &[u8]);
    }

    #[test]
    fn test_strided_view_rows() {
        // 4x3 buffer, view over the middle 2x2.
        let data: Vec<u8> = (0..12).collect();
        let view = RasterView::from_parts(&data[5..], 2, 2, 4);

        assert_eq!(view.row(0), &[5, 6]);
        assert_eq!(view.row(1), &[9, 10]);
    }
}
