//! Costmap storage and raster buffers.
//!
//! - [`Costmap`]: the host-owned byte grid layers update
//! - [`Raster`], [`RasterView`], [`RasterViewMut`]: row-major 2D buffers
//!   used for the call-scoped masks and label images
//! - [`convert`]: the elementwise transform the pipeline is built from

mod costmap;
pub(crate) mod raster;

pub use costmap::{Costmap, FREE_SPACE, LETHAL_OBSTACLE};
pub use raster::{convert, Raster, RasterView, RasterViewMut};
