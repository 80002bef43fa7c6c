//! The denoise costmap layer.
//!
//! Filters noise-induced freestanding obstacles or small obstacle groups
//! out of the costmap window it is asked to update. The pipeline per
//! update call:
//!
//! ```text
//! costmap window ──convert──▶ binary mask ──label──▶ label image
//!                                                        │
//! costmap window ◀──convert── clear mask ◀──filter── group sizes
//! ```
//!
//! Only cells belonging to a sub-threshold group are written back; every
//! other byte value in the window passes through untouched.

use log::{debug, warn};

use crate::core::{Pose2D, Window};
use crate::error::Result;
use crate::grid::{convert, Costmap, Raster, LETHAL_OBSTACLE};
use crate::layer::CostmapLayer;

use super::config::{ConnectivityType, DenoiseConfig};
use super::filter::cells_to_clear;
use super::labeling::label;

/// Costmap layer that erases obstacle groups below a size threshold.
///
/// Connectivity and threshold are fixed at construction; the only
/// mutable state is the up-to-date flag the host polls via
/// [`is_current`](CostmapLayer::is_current).
#[derive(Clone, Debug)]
pub struct DenoiseLayer {
    enabled: bool,
    minimal_group_size: usize,
    group_connectivity_type: ConnectivityType,
    empty_cell_value: u8,
    filled_cell_value: u8,
    current: bool,
}

impl DenoiseLayer {
    /// Create a layer from a raw configuration.
    ///
    /// Out-of-range parameters are coerced to valid values, with one
    /// warning per substitution: `minimal_group_size` of 1 or less is
    /// clamped to 1 (which disables filtering), and a
    /// `group_connectivity_type` other than 4 or 8 falls back to 8.
    pub fn new(config: &DenoiseConfig) -> Self {
        let minimal_group_size = if config.minimal_group_size <= 1 {
            warn!(
                "DenoiseLayer: param minimal_group_size: {}. A value of 1 or less \
                 means that all map cells will be left as they are.",
                config.minimal_group_size
            );
            1
        } else {
            config.minimal_group_size as usize
        };

        let group_connectivity_type = match config.group_connectivity_type {
            4 => ConnectivityType::Way4,
            8 => ConnectivityType::Way8,
            other => {
                warn!(
                    "DenoiseLayer: param group_connectivity_type: {}. Possible values \
                     are 4 (neighbors are connected horizontally and vertically) or 8 \
                     (neighbors are connected horizontally, vertically and diagonally). \
                     The default value 8 will be used.",
                    other
                );
                ConnectivityType::Way8
            }
        };

        Self {
            enabled: config.enabled,
            minimal_group_size,
            group_connectivity_type,
            empty_cell_value: crate::grid::FREE_SPACE,
            filled_cell_value: LETHAL_OBSTACLE,
            current: true,
        }
    }

    /// The effective group size threshold after coercion.
    #[inline]
    pub fn minimal_group_size(&self) -> usize {
        self.minimal_group_size
    }

    /// The effective connectivity after coercion.
    #[inline]
    pub fn connectivity(&self) -> ConnectivityType {
        self.group_connectivity_type
    }

    /// Run the denoise pipeline over one window of the costmap.
    fn denoise(&self, grid: &mut Costmap, window: Window) -> Result<()> {
        // Extract the binary occupancy mask for the window.
        let mut mask: Raster<u8> = Raster::filled(window.width(), window.height(), 0);
        let filled = self.filled_cell_value;
        convert(grid.window(window)?, &mut mask.view_mut(), |&cost, occ| {
            *occ = u8::from(cost == filled)
        })?;

        let (labels, group_sizes) = label(&mask, self.group_connectivity_type);
        let selected = cells_to_clear(&labels, &group_sizes, self.minimal_group_size);

        // Write back: only selected cells are reset to empty.
        let empty = self.empty_cell_value;
        let mut target = grid.window_mut(window)?;
        convert(selected.view(), &mut target, |&sel, cost| {
            if sel != 0 {
                *cost = empty;
            }
        })?;

        let cleared = selected.as_slice().iter().filter(|&&s| s != 0).count();
        debug!(
            "DenoiseLayer: {} groups in {}x{} window, {} cells cleared",
            group_sizes.len() - 1,
            window.width(),
            window.height(),
            cleared
        );

        Ok(())
    }
}

impl Default for DenoiseLayer {
    fn default() -> Self {
        Self::new(&DenoiseConfig::default())
    }
}

impl CostmapLayer for DenoiseLayer {
    fn reset(&mut self) {
        self.current = false;
    }

    fn is_clearable(&self) -> bool {
        false
    }

    fn is_current(&self) -> bool {
        self.current
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A pure filter never needs to expand the area under consideration.
    fn update_bounds(&mut self, _robot: Pose2D, window: Window) -> Window {
        window
    }

    fn update_costs(&mut self, grid: &mut Costmap, window: Window) -> Result<()> {
        if self.enabled && !window.is_empty() {
            self.denoise(grid, window)?;
        }
        self.current = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::FREE_SPACE;

    fn layer(minimal_group_size: i64, connectivity: i64) -> DenoiseLayer {
        DenoiseLayer::new(&DenoiseConfig {
            enabled: true,
            minimal_group_size,
            group_connectivity_type: connectivity,
        })
    }

    #[test]
    fn test_parameter_coercion() {
        let l = layer(0, 5);
        assert_eq!(l.minimal_group_size(), 1);
        assert_eq!(l.connectivity(), ConnectivityType::Way8);

        let l = layer(-3, 4);
        assert_eq!(l.minimal_group_size(), 1);
        assert_eq!(l.connectivity(), ConnectivityType::Way4);

        let l = layer(3, 8);
        assert_eq!(l.minimal_group_size(), 3);
        assert_eq!(l.connectivity(), ConnectivityType::Way8);
    }

    #[test]
    fn test_reset_and_current() {
        let mut l = DenoiseLayer::default();
        assert!(l.is_current());

        l.reset();
        assert!(!l.is_current());

        let mut grid = Costmap::new(3, 3);
        l.update_costs(&mut grid, Window::full(3, 3)).unwrap();
        assert!(l.is_current());
    }

    #[test]
    fn test_never_clearable() {
        assert!(!DenoiseLayer::default().is_clearable());
    }

    #[test]
    fn test_update_bounds_is_identity() {
        let mut l = DenoiseLayer::default();
        let window = Window::new(1, 2, 10, 12);

        let out = l.update_bounds(Pose2D::new(3.0, -1.0, 0.5), window);

        assert_eq!(out, window);
    }

    #[test]
    fn test_single_cell_noise_removed() {
        let mut l = layer(2, 8);
        let mut grid = Costmap::new(5, 5);
        grid.set(2, 2, LETHAL_OBSTACLE);

        l.update_costs(&mut grid, Window::full(5, 5)).unwrap();

        assert_eq!(grid.get(2, 2), Some(FREE_SPACE));
    }

    #[test]
    fn test_non_sentinel_values_untouched() {
        let mut l = layer(2, 8);
        let mut grid = Costmap::new(5, 5);
        grid.set(0, 0, 128); // inflated cost, not an obstacle sentinel
        grid.set(4, 4, 253);
        grid.set(2, 2, LETHAL_OBSTACLE);

        l.update_costs(&mut grid, Window::full(5, 5)).unwrap();

        assert_eq!(grid.get(0, 0), Some(128));
        assert_eq!(grid.get(4, 4), Some(253));
        assert_eq!(grid.get(2, 2), Some(FREE_SPACE));
    }

    #[test]
    fn test_disabled_layer_is_a_noop() {
        let mut l = DenoiseLayer::new(&DenoiseConfig {
            enabled: false,
            ..DenoiseConfig::default()
        });
        let mut grid = Costmap::new(4, 4);
        grid.set(1, 1, LETHAL_OBSTACLE);
        let before = grid.clone();

        l.update_costs(&mut grid, Window::full(4, 4)).unwrap();

        assert_eq!(grid, before);
        assert!(l.is_current());
    }

    #[test]
    fn test_empty_window_is_a_noop() {
        let mut l = layer(2, 8);
        let mut grid = Costmap::new(4, 4);
        grid.set(1, 1, LETHAL_OBSTACLE);
        let before = grid.clone();

        l.update_costs(&mut grid, Window::new(2, 2, 2, 4)).unwrap();

        assert_eq!(grid, before);
    }

    #[test]
    fn test_out_of_bounds_window_fails() {
        let mut l = layer(2, 8);
        let mut grid = Costmap::new(4, 4);

        assert!(l.update_costs(&mut grid, Window::new(0, 0, 5, 4)).is_err());
    }
}
