//! Noise filtering for costmap windows.
//!
//! The pipeline is strictly linear, invoked once per update cycle:
//!
//! 1. [`grid::convert`](crate::grid::convert) extracts a binary
//!    occupancy mask from the costmap window
//! 2. [`labeling::label`] groups occupied cells into connected components
//! 3. [`filter::cells_to_clear`] marks every cell of a group smaller than
//!    the configured threshold
//! 4. a second `convert` writes the marked cells back as free space
//!
//! [`DenoiseLayer`] wires the steps together behind the
//! [`CostmapLayer`](crate::layer::CostmapLayer) interface.
//!
//! # Example
//!
//! ```
//! use costmap_denoise::{
//!     Costmap, CostmapLayer, DenoiseConfig, DenoiseLayer, Window, LETHAL_OBSTACLE,
//! };
//!
//! let mut layer = DenoiseLayer::new(&DenoiseConfig::default());
//! let mut grid = Costmap::new(20, 20);
//! grid.set(5, 5, LETHAL_OBSTACLE); // isolated noise cell
//!
//! layer.update_costs(&mut grid, Window::full(20, 20)).unwrap();
//! assert_eq!(grid.get(5, 5), Some(0));
//! ```

mod config;
pub mod filter;
pub mod labeling;
mod layer;

pub use config::{ConnectivityType, DenoiseConfig};
pub use layer::DenoiseLayer;
