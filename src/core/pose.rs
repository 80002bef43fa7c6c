//! 2D robot pose.
//!
//! Coordinate frame follows ROS REP-103: X-forward, Y-left,
//! counter-clockwise positive rotation.

/// Robot position and orientation.
///
/// The host hands the current pose to [`update_bounds`] so that layers
/// which track the robot can grow their update window. The denoise layer
/// is a pure filter and ignores it.
///
/// [`update_bounds`]: crate::layer::CostmapLayer::update_bounds
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f64,
    /// Y position in meters.
    pub y: f64,
    /// Heading angle in radians, CCW positive from X-axis.
    pub theta: f64,
}

impl Pose2D {
    /// Create a new pose.
    #[inline]
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Identity pose (origin, facing forward).
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
