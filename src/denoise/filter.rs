//! Selection of sub-threshold obstacle groups.

use crate::grid::Raster;

/// Build a mask of cells whose group is smaller than `minimal_group_size`.
///
/// The result has the same dimensions as `labels` and holds 1 exactly at
/// cells whose label `L` satisfies `group_sizes[L] < minimal_group_size`.
/// Background cells (label 0) are never selected, and a threshold of 1 or
/// less selects nothing: every group of at least one cell is kept.
///
/// Every positive label in `labels` must index into `group_sizes`, as
/// guaranteed by [`labeling::label`](super::labeling::label).
///
/// # Panics
/// Panics if a positive label is out of range for `group_sizes`.
pub fn cells_to_clear(
    labels: &Raster<u32>,
    group_sizes: &[u32],
    minimal_group_size: usize,
) -> Raster<u8> {
    let mut selected: Raster<u8> = Raster::filled(labels.width(), labels.height(), 0);
    if minimal_group_size <= 1 {
        return selected;
    }

    for (&label, out) in labels.as_slice().iter().zip(selected.as_mut_slice()) {
        if label != 0 && (group_sizes[label as usize] as usize) < minimal_group_size {
            *out = 1;
        }
    }

    selected
}
