//! Player body: per-tick integration, double jump and drop-through

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::timer::Deferred;
use crate::tuning::{ArenaTuning, PlayerTuning};

/// What happened during one integration step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Top edge went below the bottom of the arena
    pub fell_out: bool,
}

/// The player-controlled body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub speed: f32,
    /// Negative (upward)
    pub jump_power: f32,
    pub gravity: f32,
    pub friction: f32,
    /// Re-asserted each tick by the platform pass, never remembered
    pub is_on_ground: bool,
    pub is_detected: bool,
    pub jump_count: u8,
    pub max_jumps: u8,
    /// True while the drop-through window is open. Never persisted: the
    /// timer that closes it is not either.
    #[serde(skip)]
    pub is_dropping: bool,
    drop_nudge: f32,
    drop_window_ms: f64,
    /// Closes the drop-through window
    #[serde(skip)]
    drop_timer: Deferred,
}

impl Player {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            x: tuning.spawn_x,
            y: tuning.spawn_y,
            width: tuning.width,
            height: tuning.height,
            velocity_x: 0.0,
            velocity_y: 0.0,
            speed: tuning.speed,
            jump_power: tuning.jump_power,
            gravity: tuning.gravity,
            friction: tuning.friction,
            is_on_ground: false,
            is_detected: false,
            jump_count: 0,
            max_jumps: tuning.max_jumps,
            is_dropping: false,
            drop_nudge: tuning.drop_nudge,
            drop_window_ms: tuning.drop_window_ms,
            drop_timer: Deferred::default(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal control for this tick: velocity is reset, then set to
    /// ±speed for a held direction (right wins if both are held)
    pub fn apply_horizontal_input(&mut self, left: bool, right: bool) {
        self.velocity_x = 0.0;
        if left {
            self.velocity_x = -self.speed;
        }
        if right {
            self.velocity_x = self.speed;
        }
    }

    /// Advance one tick: gravity, integrate, friction, clamp, ground reset
    pub fn update(&mut self, arena: &ArenaTuning) -> StepOutcome {
        self.velocity_y += self.gravity;
        self.x += self.velocity_x;
        self.y += self.velocity_y;
        self.velocity_x *= self.friction;

        let max_x = (arena.width - self.width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);

        let fell_out = self.y > arena.height;

        // Grounded by the previous tick's platform pass
        if self.is_on_ground {
            self.jump_count = 0;
        }
        self.is_on_ground = false;

        StepOutcome { fell_out }
    }

    /// Jump (or air jump). Returns false when out of jumps.
    pub fn jump(&mut self) -> bool {
        if self.jump_count >= self.max_jumps {
            return false;
        }
        self.velocity_y = self.jump_power;
        self.is_on_ground = false;
        self.jump_count += 1;
        true
    }

    /// Fall through the platform underfoot. Only works while grounded.
    pub fn drop_down(&mut self, now_ms: f64) -> bool {
        if !self.is_on_ground {
            return false;
        }
        self.y += self.drop_nudge;
        self.is_on_ground = false;
        self.is_dropping = true;
        self.drop_timer.schedule(now_ms, self.drop_window_ms);
        true
    }

    /// Fire due deferred actions (call once at the start of a tick)
    pub fn poll_timers(&mut self, now_ms: f64) {
        if self.drop_timer.fire_if_due(now_ms) {
            self.is_dropping = false;
        }
    }

    /// Drop any pending deferred actions and their effects
    pub fn cancel_timers(&mut self) {
        self.drop_timer.cancel();
        self.is_dropping = false;
    }

    /// Snap onto a platform top
    pub fn land_on(&mut self, top: f32) {
        self.y = top - self.height;
        self.velocity_y = 0.0;
        self.is_on_ground = true;
    }
}
