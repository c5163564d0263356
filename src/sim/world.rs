//! Platforms, coins and the level generator

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect};
use crate::tuning::{ArenaTuning, LevelTier, WorldTuning};

/// A static, axis-aligned ledge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A pickup; `collected` flips once and the coin is gone for good
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            radius,
            collected: false,
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(Vec2::new(self.x, self.y), self.radius)
    }
}

/// One generated level layout. Replaced wholesale, never edited in place
/// (except for coin `collected` flags).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    /// Index 0 is always the ground
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
}

impl World {
    /// Generate a fresh layout for a difficulty tier
    pub fn generate<R: Rng>(
        tier: LevelTier,
        arena: &ArenaTuning,
        tuning: &WorldTuning,
        rng: &mut R,
    ) -> Self {
        let platforms = generate_platforms(tier.platforms, arena, tuning, rng);
        let coins = generate_coins(&platforms, tier.coins as usize, tuning, rng);
        log::debug!(
            "Generated world: {} platforms, {} coins",
            platforms.len(),
            coins.len()
        );
        Self { platforms, coins }
    }

    /// Replace the whole coin set with `count` new coins
    pub fn respawn_coins<R: Rng>(
        &mut self,
        count: u32,
        tuning: &WorldTuning,
        rng: &mut R,
    ) {
        self.coins = generate_coins(&self.platforms, count as usize, tuning, rng);
    }

    /// True once every coin in the active set is collected (vacuously true
    /// for an empty set)
    pub fn all_coins_collected(&self) -> bool {
        self.coins.iter().all(|c| c.collected)
    }

    /// Coins still in play
    pub fn active_coins(&self) -> impl Iterator<Item = &Coin> {
        self.coins.iter().filter(|c| !c.collected)
    }
}

/// Ground slab spanning the arena, followed by `count` random ledges
pub fn generate_platforms<R: Rng>(
    count: usize,
    arena: &ArenaTuning,
    tuning: &WorldTuning,
    rng: &mut R,
) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(count + 1);
    platforms.push(Platform::new(
        0.0,
        arena.height - tuning.ground_height,
        arena.width,
        tuning.ground_height,
    ));

    for _ in 0..count {
        let width =
            tuning.platform_min_width + rng.random::<f32>() * tuning.platform_width_variance;
        let x = rng.random::<f32>() * (arena.width - width).max(0.0);
        let y = tuning.platform_min_y + rng.random::<f32>() * tuning.platform_y_span;
        platforms.push(Platform::new(x, y, width, tuning.platform_height));
    }

    platforms
}

/// Coins hovering above random floating platforms (the ground if there are none)
pub fn generate_coins<R: Rng>(
    platforms: &[Platform],
    count: usize,
    tuning: &WorldTuning,
    rng: &mut R,
) -> Vec<Coin> {
    if platforms.is_empty() {
        return Vec::new();
    }
    let candidates = if platforms.len() > 1 {
        &platforms[1..]
    } else {
        platforms
    };

    (0..count)
        .map(|_| {
            let p = candidates[rng.random_range(0..candidates.len())];
            let usable = (p.width - 2.0 * tuning.coin_margin).max(0.0);
            let x = p.x + tuning.coin_margin + rng.random::<f32>() * usable;
            let y = p.y - tuning.coin_lift;
            Coin::new(x, y, tuning.coin_radius)
        })
        .collect()
}
