//! Core types shared across the crate.
//!
//! - [`Window`]: the per-call update rectangle in cell coordinates
//! - [`Pose2D`]: robot pose handed through the layer interface

mod pose;
mod window;

pub use pose::Pose2D;
pub use window::Window;
