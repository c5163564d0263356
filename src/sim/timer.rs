//! Deferred actions measured in wall-clock milliseconds
//!
//! The frame loop polls these at the start of every tick. A `Deferred` lives
//! inside the entity that owns it, so replacing the entity drops any pending
//! action with it.

use serde::{Deserialize, Serialize};

/// A single pending action with an absolute deadline
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Deferred {
    deadline_ms: Option<f64>,
}

impl Deferred {
    /// Arm (or re-arm) the action to fire `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) {
        self.deadline_ms = Some(now_ms + delay_ms);
    }

    /// Disarm without firing
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Returns true exactly once, on the first poll at or past the deadline
    pub fn fire_if_due(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let mut timer = Deferred::default();
        timer.schedule(1000.0, 200.0);
        assert!(!timer.fire_if_due(1199.0));
        assert!(timer.fire_if_due(1200.0));
        assert!(!timer.fire_if_due(5000.0));
    }

    #[test]
    fn test_cancel() {
        let mut timer = Deferred::default();
        timer.schedule(0.0, 200.0);
        timer.cancel();
        assert!(!timer.fire_if_due(1000.0));
    }

    #[test]
    fn test_reschedule_extends_deadline() {
        let mut timer = Deferred::default();
        timer.schedule(0.0, 200.0);
        timer.schedule(150.0, 200.0);
        assert!(!timer.fire_if_due(250.0));
        assert!(timer.fire_if_due(350.0));
    }
}
