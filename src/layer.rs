//! Costmap layer interface.
//!
//! The host owns the master costmap and a stack of layers. Each update
//! cycle it asks every layer for the window it needs
//! ([`update_bounds`](CostmapLayer::update_bounds)), then lets each layer
//! update the master grid inside the agreed window
//! ([`update_costs`](CostmapLayer::update_costs)). The host serializes
//! access: a layer has exclusive write access to its window for the
//! duration of one call.

use crate::core::{Pose2D, Window};
use crate::error::Result;
use crate::grid::Costmap;

/// A plugin in the host's costmap layer stack.
pub trait CostmapLayer: Send + Sync {
    /// Drop the layer's cached validity. Configuration is unaffected;
    /// the host recomputes the layer on next use.
    fn reset(&mut self);

    /// Whether the host may ask this layer to clear cost information.
    fn is_clearable(&self) -> bool;

    /// Whether the layer's data is up to date.
    fn is_current(&self) -> bool;

    /// Whether the layer is enabled. Hosts skip disabled layers.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Report the costmap area this layer needs to update, given the
    /// robot pose and the window proposed so far.
    fn update_bounds(&mut self, robot: Pose2D, window: Window) -> Window;

    /// Update the master grid within the window.
    fn update_costs(&mut self, grid: &mut Costmap, window: Window) -> Result<()>;
}
