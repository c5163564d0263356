//! Detection cone geometry
//!
//! A cone is a circular sector around a pivot:
//! - origin: pivot point (screen space)
//! - center_angle: bisector direction (radians)
//! - width: full opening angle (the sector spans center ± width/2)
//! - range: sector radius

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{angular_difference, cartesian_to_polar};

/// A circular sector anchored at a pivot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectionCone {
    /// Pivot point
    pub origin: Vec2,
    /// Bisector angle (radians, not necessarily normalized)
    pub center_angle: f32,
    /// Full opening angle (radians)
    pub width: f32,
    /// Reach from the pivot
    pub range: f32,
}

impl DetectionCone {
    pub fn new(origin: Vec2, center_angle: f32, width: f32, range: f32) -> Self {
        Self {
            origin,
            center_angle,
            width,
            range,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Angle of the leading edge
    pub fn start_angle(&self) -> f32 {
        self.center_angle - self.half_width()
    }

    /// Angle of the trailing edge
    pub fn end_angle(&self) -> f32 {
        self.center_angle + self.half_width()
    }

    /// Check if a direction is strictly inside the opening (handles wraparound)
    pub fn contains_angle(&self, theta: f32) -> bool {
        angular_difference(theta, self.center_angle) < self.half_width()
    }

    /// Check if a point is strictly inside the sector
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (r, theta) = cartesian_to_polar(point - self.origin);
        r < self.range && self.contains_angle(theta)
    }
}
