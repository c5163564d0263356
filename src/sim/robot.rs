//! Stationary sentry with a sweeping detection cone
//!
//! The beam oscillates between `SWEEP_MIN` (π, pointing left) and
//! `SWEEP_MAX` (2π, pointing right), passing through 1.5π (straight up on
//! screen). It never completes a full rotation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::cone::DetectionCone;
use crate::consts::{SWEEP_MAX, SWEEP_MIN};
use crate::tuning::RobotTuning;

/// Sweep direction along the angle axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepDirection {
    /// Angle decreasing (-1)
    Reverse,
    /// Angle increasing (+1)
    Forward,
}

impl SweepDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            SweepDirection::Reverse => -1.0,
            SweepDirection::Forward => 1.0,
        }
    }
}

/// The robot sentry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Beam bisector, kept within [π, 2π]
    pub detection_angle: f32,
    /// Radians per tick
    pub detection_speed: f32,
    pub detection_range: f32,
    /// Full cone angle
    pub detection_width: f32,
    pub direction: SweepDirection,
}

impl Robot {
    pub fn new(tuning: &RobotTuning) -> Self {
        Self {
            x: tuning.x,
            y: tuning.y,
            radius: tuning.radius,
            detection_angle: tuning.start_angle.clamp(SWEEP_MIN, SWEEP_MAX),
            detection_speed: tuning.detection_speed,
            detection_range: tuning.detection_range,
            detection_width: tuning.detection_width,
            direction: SweepDirection::Forward,
        }
    }

    #[inline]
    pub fn pivot(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Current beam as a cone
    pub fn beam(&self) -> DetectionCone {
        DetectionCone::new(
            self.pivot(),
            self.detection_angle,
            self.detection_width,
            self.detection_range,
        )
    }

    /// Reflect at the sweep bounds, then advance one step
    pub fn sweep(&mut self) {
        if self.detection_angle >= SWEEP_MAX {
            self.detection_angle = SWEEP_MAX;
            self.direction = SweepDirection::Reverse;
        }
        if self.detection_angle <= SWEEP_MIN {
            self.detection_angle = SWEEP_MIN;
            self.direction = SweepDirection::Forward;
        }
        self.detection_angle += self.detection_speed * self.direction.sign();
        // Step can overshoot by less than one increment; pin it back
        self.detection_angle = self.detection_angle.clamp(SWEEP_MIN, SWEEP_MAX);
    }

    /// Whether a point is within range and inside the cone. Pure: evaluated
    /// from scratch on every call.
    pub fn detects(&self, target: Vec2) -> bool {
        self.beam().contains_point(target)
    }

    /// Sweep, then test the target. Returns true if the target is seen.
    pub fn update(&mut self, target: Vec2) -> bool {
        self.sweep();
        self.detects(target)
    }

    /// Scale beam speed (difficulty escalation)
    pub fn speed_up(&mut self, multiplier: f32) {
        self.detection_speed *= multiplier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polar_to_cartesian;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    fn robot() -> Robot {
        Robot::new(&RobotTuning::default())
    }

    #[test]
    fn test_starts_pointing_up() {
        let r = robot();
        assert!((r.detection_angle - 1.5 * PI).abs() < 1e-6);
        assert_eq!(r.direction, SweepDirection::Forward);
    }

    #[test]
    fn test_sweep_reflects_at_bounds() {
        let mut r = robot();
        r.detection_speed = 0.1;

        let mut flips = 0;
        let mut last = r.direction;
        for _ in 0..200 {
            r.sweep();
            assert!(r.detection_angle >= PI && r.detection_angle <= 2.0 * PI);
            if r.direction != last {
                // Flip happens exactly at a bound (before the step is applied)
                let prev_bound = if r.direction == SweepDirection::Reverse {
                    2.0 * PI
                } else {
                    PI
                };
                assert!((r.detection_angle - prev_bound).abs() <= 0.1 + 1e-5);
                flips += 1;
                last = r.direction;
            }
        }
        assert!(flips >= 3);
    }

    #[test]
    fn test_upper_bound_flips_direction() {
        let mut r = robot();
        r.detection_angle = 2.0 * PI + 0.003;
        r.sweep();
        assert_eq!(r.direction, SweepDirection::Reverse);
        assert!((r.detection_angle - (2.0 * PI - 0.01)).abs() < 1e-5);
    }

    #[test]
    fn test_lower_bound_flips_direction() {
        let mut r = robot();
        r.direction = SweepDirection::Reverse;
        r.detection_angle = PI - 0.5;
        r.sweep();
        assert_eq!(r.direction, SweepDirection::Forward);
        assert!((r.detection_angle - (PI + 0.01)).abs() < 1e-5);
    }

    #[test]
    fn test_detection_range_and_cone() {
        let r = robot();
        let pivot = r.pivot();
        let at = |dist: f32, off_deg: f32| {
            pivot + polar_to_cartesian(dist, r.detection_angle + off_deg.to_radians())
        };

        assert!(r.detects(at(199.0, 0.0)));
        assert!(!r.detects(at(201.0, 0.0)));
        // 70° off-axis is outside the 60° half-width
        assert!(!r.detects(at(100.0, 70.0)));
        assert!(!r.detects(at(100.0, -70.0)));
        assert!(r.detects(at(100.0, 50.0)));
    }

    #[test]
    fn test_detection_after_sweep_uses_new_angle() {
        let mut r = robot();
        r.detection_speed = 0.5;
        let target = r.pivot() + polar_to_cartesian(150.0, 1.5 * PI + 1.3);
        assert!(!r.detects(target));
        // Sweep moves the beam onto the target
        assert!(r.update(target));
    }

    #[test]
    fn test_speed_up() {
        let mut r = robot();
        r.speed_up(1.2);
        assert!((r.detection_speed - 0.012).abs() < 1e-7);
    }

    proptest! {
        #[test]
        fn angle_never_leaves_sweep(
            start in PI..2.0 * PI,
            speed in 0.001f32..0.5,
            steps in 1usize..400,
        ) {
            let mut r = robot();
            r.detection_angle = start;
            r.detection_speed = speed;
            for _ in 0..steps {
                r.sweep();
                prop_assert!(r.detection_angle >= PI);
                prop_assert!(r.detection_angle <= 2.0 * PI);
            }
        }
    }
}
