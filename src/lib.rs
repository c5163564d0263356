//! Beam Runner - a small stealth platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, detection, game state)
//! - `game`: Frame controller (input queue, clock, leaderboard saves)
//! - `platform`: Input and time abstraction
//! - `persistence`: Collection-scoped key/value store
//! - `leaderboard`: Best score per user
//! - `tuning`: Data-driven game balance
//! - `renderer`: Read-only views of the simulation

pub mod game;
pub mod leaderboard;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use leaderboard::{Leaderboard, ScoreRecord};
pub use tuning::Tuning;

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Canvas dimensions (y grows downward)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player defaults (per-tick units)
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 400.0;
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Negative is upward
    pub const PLAYER_JUMP_POWER: f32 = -12.0;
    pub const PLAYER_GRAVITY: f32 = 0.5;
    /// Horizontal velocity multiplier applied after each integration step
    pub const PLAYER_FRICTION: f32 = 0.85;
    /// Ground jump plus one air jump
    pub const PLAYER_MAX_JUMPS: u8 = 2;
    /// Downward nudge that clears the landing band on the next tick
    pub const DROP_NUDGE: f32 = 5.0;
    /// Real-time window during which platforms are ignored after a drop
    pub const DROP_WINDOW_MS: f64 = 200.0;

    /// Robot defaults
    pub const ROBOT_X: f32 = CANVAS_WIDTH / 2.0;
    pub const ROBOT_Y: f32 = 525.0;
    pub const ROBOT_RADIUS: f32 = 25.0;
    /// Straight up in screen coordinates
    pub const ROBOT_START_ANGLE: f32 = 1.5 * PI;
    /// Radians per tick
    pub const ROBOT_DETECTION_SPEED: f32 = 0.01;
    pub const ROBOT_DETECTION_RANGE: f32 = 200.0;
    /// Full cone angle (120°)
    pub const ROBOT_DETECTION_WIDTH: f32 = PI / 1.5;
    /// Sweep bounds
    pub const SWEEP_MIN: f32 = PI;
    pub const SWEEP_MAX: f32 = 2.0 * PI;

    /// World generation
    pub const GROUND_HEIGHT: f32 = 50.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const PLATFORM_MIN_WIDTH: f32 = 100.0;
    pub const PLATFORM_WIDTH_VARIANCE: f32 = 80.0;
    pub const PLATFORM_MIN_Y: f32 = 150.0;
    pub const PLATFORM_Y_SPAN: f32 = 350.0;
    pub const COIN_RADIUS: f32 = 12.0;
    /// Height of a coin's center above its platform's top
    pub const COIN_LIFT: f32 = 15.0;
    /// Horizontal inset from each platform edge
    pub const COIN_MARGIN: f32 = 10.0;

    /// Scoring
    pub const COIN_VALUE: u64 = 100;
    /// Every Nth coin triggers an out-of-band leaderboard save
    pub const CHECKPOINT_EVERY: u32 = 10;
    pub const LEVEL_BONUS: u64 = 500;

    /// Difficulty escalation
    pub const LEVEL_TWO_AFTER_SECS: f32 = 60.0;
    pub const LEVEL_TWO_SPEED_MULTIPLIER: f32 = 1.2;
    pub const TIER_ONE_PLATFORMS: usize = 6;
    pub const TIER_ONE_COINS: u32 = 5;
    pub const TIER_TWO_PLATFORMS: usize = 9;
    pub const TIER_TWO_COINS: u32 = 10;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Smallest unsigned angle between two directions, in [0, π]
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let d = (normalize_angle(a) - normalize_angle(b)).abs();
    if d > PI { TAU - d } else { d }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta), theta in [0, 2π)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), normalize_angle(pos.y.atan2(pos.x)))
}
