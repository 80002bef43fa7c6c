//! # costmap-denoise
//!
//! Noise filtering for 2D occupancy costmaps.
//!
//! A perception stack occasionally leaves freestanding obstacle cells or
//! small obstacle clusters in the costmap: measurement noise, specular
//! lidar returns, dust. This crate removes them while leaving larger
//! obstacle regions untouched.
//!
//! ## Overview
//!
//! [`DenoiseLayer`] is a [`CostmapLayer`] plugin. On every update call it
//! classifies the obstacle cells of its window into connected groups
//! (4- or 8-connectivity), measures each group, and resets every group
//! smaller than `minimal_group_size` to free space. Cost values other
//! than the obstacle and free sentinels pass through unchanged.
//!
//! ## Quick Start
//!
//! ```
//! use costmap_denoise::{
//!     Costmap, CostmapLayer, DenoiseConfig, DenoiseLayer, Window, LETHAL_OBSTACLE,
//! };
//!
//! // minimal_group_size = 2: freestanding obstacle cells are noise
//! let mut layer = DenoiseLayer::new(&DenoiseConfig::default());
//!
//! let mut grid = Costmap::new(100, 100);
//! grid.set(10, 10, LETHAL_OBSTACLE); // isolated -> will be cleared
//! grid.set(50, 50, LETHAL_OBSTACLE); // pair -> will be kept
//! grid.set(50, 51, LETHAL_OBSTACLE);
//!
//! layer.update_costs(&mut grid, Window::full(100, 100)).unwrap();
//!
//! assert_eq!(grid.get(10, 10), Some(0));
//! assert_eq!(grid.get(50, 50), Some(LETHAL_OBSTACLE));
//! ```
//!
//! ## Coordinate System
//!
//! Cell (x, y) addresses column x of row y; storage is row-major. Update
//! windows are inclusive-exclusive rectangles in cell coordinates and
//! must lie inside the grid.
//!
//! ## Behavior at window edges
//!
//! Cells outside the window are treated as free: a group is never grown
//! using grid content beyond the declared window, so an obstacle group
//! straddling the edge may be split across consecutive calls. Update
//! windows are expected to be stable or overlapping frame to frame.

#![warn(missing_docs)]

// Fundamental value types
pub mod core;

// Costmap and raster storage
pub mod grid;

// Noise filtering pipeline
pub mod denoise;

// Layer plugin interface
pub mod layer;

// Error types
pub mod error;

pub use self::core::{Pose2D, Window};
pub use denoise::{ConnectivityType, DenoiseConfig, DenoiseLayer};
pub use error::{DenoiseError, Result};
pub use grid::{convert, Costmap, Raster, RasterView, RasterViewMut, FREE_SPACE, LETHAL_OBSTACLE};
pub use layer::CostmapLayer;
