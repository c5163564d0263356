//! Data-driven game balance
//!
//! Every value has a default in `crate::consts`; a TOML file only needs to
//! name the fields it overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming the tuning file
pub const TUNING_PATH_ENV: &str = "BEAM_RUNNER_TUNING";
/// Path used when the environment variable is unset
pub const DEFAULT_TUNING_PATH: &str = "config/tuning.toml";

/// Playfield size
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// Player body and movement, in per-tick units
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub jump_power: f32,
    pub gravity: f32,
    pub friction: f32,
    pub max_jumps: u8,
    pub drop_nudge: f32,
    pub drop_window_ms: f64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            spawn_x: PLAYER_SPAWN_X,
            spawn_y: PLAYER_SPAWN_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            jump_power: PLAYER_JUMP_POWER,
            gravity: PLAYER_GRAVITY,
            friction: PLAYER_FRICTION,
            max_jumps: PLAYER_MAX_JUMPS,
            drop_nudge: DROP_NUDGE,
            drop_window_ms: DROP_WINDOW_MS,
        }
    }
}

/// Robot pivot and beam
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotTuning {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub start_angle: f32,
    pub detection_speed: f32,
    pub detection_range: f32,
    pub detection_width: f32,
}

impl Default for RobotTuning {
    fn default() -> Self {
        Self {
            x: ROBOT_X,
            y: ROBOT_Y,
            radius: ROBOT_RADIUS,
            start_angle: ROBOT_START_ANGLE,
            detection_speed: ROBOT_DETECTION_SPEED,
            detection_range: ROBOT_DETECTION_RANGE,
            detection_width: ROBOT_DETECTION_WIDTH,
        }
    }
}

/// Platform and coin placement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub ground_height: f32,
    pub platform_height: f32,
    pub platform_min_width: f32,
    pub platform_width_variance: f32,
    pub platform_min_y: f32,
    pub platform_y_span: f32,
    pub coin_radius: f32,
    pub coin_lift: f32,
    pub coin_margin: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            ground_height: GROUND_HEIGHT,
            platform_height: PLATFORM_HEIGHT,
            platform_min_width: PLATFORM_MIN_WIDTH,
            platform_width_variance: PLATFORM_WIDTH_VARIANCE,
            platform_min_y: PLATFORM_MIN_Y,
            platform_y_span: PLATFORM_Y_SPAN,
            coin_radius: COIN_RADIUS,
            coin_lift: COIN_LIFT,
            coin_margin: COIN_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    pub coin_value: u64,
    pub checkpoint_every: u32,
    pub level_bonus: u64,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            coin_value: COIN_VALUE,
            checkpoint_every: CHECKPOINT_EVERY,
            level_bonus: LEVEL_BONUS,
        }
    }
}

/// World size for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTier {
    /// Floating platforms (the ground is always added)
    pub platforms: usize,
    /// Coins per set, and the collected count that wins the level
    pub coins: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTuning {
    pub tier_one: LevelTier,
    pub tier_two: LevelTier,
    /// Game time (seconds) after which level 2 switches on
    pub level_two_after_secs: f32,
    pub detection_speed_multiplier: f32,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            tier_one: LevelTier {
                platforms: TIER_ONE_PLATFORMS,
                coins: TIER_ONE_COINS,
            },
            tier_two: LevelTier {
                platforms: TIER_TWO_PLATFORMS,
                coins: TIER_TWO_COINS,
            },
            level_two_after_secs: LEVEL_TWO_AFTER_SECS,
            detection_speed_multiplier: LEVEL_TWO_SPEED_MULTIPLIER,
        }
    }
}

impl LevelTuning {
    /// Tier for a 1-based level number (anything past 2 stays on tier two)
    pub fn tier(&self, level: u32) -> LevelTier {
        if level <= 1 { self.tier_one } else { self.tier_two }
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena: ArenaTuning,
    pub player: PlayerTuning,
    pub robot: RobotTuning,
    pub world: WorldTuning,
    pub scoring: ScoringTuning,
    pub levels: LevelTuning,
}

impl Tuning {
    /// Parse a TOML document; missing fields keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from the file named by `BEAM_RUNNER_TUNING`. Falls back to
    /// defaults if the file is missing or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var(TUNING_PATH_ENV).unwrap_or_else(|_| DEFAULT_TUNING_PATH.to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Failed to parse {path}: {e}, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
