//! Game state and core simulation types
//!
//! Everything one episode needs lives in `GameState`; the controller only
//! adds input plumbing and persistence on top.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::robot::Robot;
use super::world::World;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation running
    Playing,
    /// Frozen; wall-clock time does not count
    Paused,
    /// Fell out or got spotted
    GameOver,
    /// Collected the level's coin target
    Won,
}

impl GamePhase {
    /// Episode has ended; only restart leaves this phase
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Why a leaderboard save was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveReason {
    /// Every Nth cumulative coin, mid-episode
    Checkpoint,
    /// Entered GameOver or Won
    EpisodeEnd,
}

/// Things that happened during a tick, drained by the controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { total: u32 },
    /// Active coin set was cleared and replaced
    CoinsRespawned { count: u32 },
    FellOut,
    Detected,
    Won,
    LevelUp { level: u32 },
    Paused,
    Resumed,
    Restarted,
    SaveRequested { reason: SaveReason, score: u64, time_secs: f32 },
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance sheet this run was created with
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub coins_collected: u32,
    /// Coins needed to win the current level
    pub total_coins: u32,
    /// Seconds of unpaused play
    pub game_time: f32,
    /// 1-based difficulty level
    pub level: u32,
    /// One-shot guard for the level-2 escalation
    pub level_two_active: bool,
    /// One save per episode end; cleared only by restart
    pub score_saved: bool,
    pub player: Player,
    pub robot: Robot,
    pub world: World,
    /// Wall-clock reading (ms) at the last counted tick
    pub last_frame_ms: f64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game; `now_ms` is the clock reading the first delta is
    /// measured from
    pub fn new(tuning: Tuning, seed: u64, now_ms: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let tier = tuning.levels.tier(1);
        let world = World::generate(tier, &tuning.arena, &tuning.world, &mut rng);

        Self {
            player: Player::new(&tuning.player),
            robot: Robot::new(&tuning.robot),
            world,
            rng,
            seed,
            phase: GamePhase::Playing,
            score: 0,
            coins_collected: 0,
            total_coins: tier.coins,
            game_time: 0.0,
            level: 1,
            level_two_active: false,
            score_saved: false,
            last_frame_ms: now_ms,
            events: Vec::new(),
            tuning,
        }
    }

    /// Reset every episode field. The RNG keeps running so the new layout
    /// differs from the old one.
    pub fn restart(&mut self, now_ms: f64) {
        // Disarm the old body's timers before it goes away
        self.player.cancel_timers();
        self.player = Player::new(&self.tuning.player);
        self.robot = Robot::new(&self.tuning.robot);

        let tier = self.tuning.levels.tier(1);
        self.world = World::generate(tier, &self.tuning.arena, &self.tuning.world, &mut self.rng);

        self.phase = GamePhase::Playing;
        self.score = 0;
        self.coins_collected = 0;
        self.total_coins = tier.coins;
        self.game_time = 0.0;
        self.level = 1;
        self.level_two_active = false;
        self.score_saved = false;
        self.last_frame_ms = now_ms;
    }

    /// Regenerate the whole layout for the current level
    pub fn regenerate_world(&mut self) {
        let tier = self.tuning.levels.tier(self.level);
        self.world = World::generate(tier, &self.tuning.arena, &self.tuning.world, &mut self.rng);
    }

    /// Replace the coin set with one sized to the current tier
    pub fn respawn_coins(&mut self) -> u32 {
        let count = self.tuning.levels.tier(self.level).coins;
        self.world.respawn_coins(count, &self.tuning.world, &mut self.rng);
        count
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queue a leaderboard save for the current score
    pub fn request_save(&mut self, reason: SaveReason) {
        self.push_event(GameEvent::SaveRequested {
            reason,
            score: self.score,
            time_secs: self.game_time,
        });
    }

    /// Move into a terminal phase, issuing the single episode-end save
    pub fn end_episode(&mut self, phase: GamePhase) {
        debug_assert!(phase.is_terminal());
        self.phase = phase;
        if !self.score_saved {
            self.score_saved = true;
            self.request_save(SaveReason::EpisodeEnd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Tuning::default(), 12345, 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.total_coins, 5);
        assert_eq!(state.world.coins.len(), 5);
        assert_eq!(state.world.platforms.len(), 7);
        assert_eq!(state.player.x, 100.0);
    }

    #[test]
    fn test_end_episode_saves_once() {
        let mut state = GameState::new(Tuning::default(), 1, 0.0);
        state.score = 300;
        state.end_episode(GamePhase::Won);
        state.end_episode(GamePhase::Won);

        let saves: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::SaveRequested { .. }))
            .collect();
        assert_eq!(saves.len(), 1);
        assert!(matches!(
            saves[0],
            GameEvent::SaveRequested {
                reason: SaveReason::EpisodeEnd,
                score: 300,
                ..
            }
        ));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = GameState::new(Tuning::default(), 77, 0.0);
        let b = GameState::new(Tuning::default(), 77, 0.0);
        assert_eq!(a.world.platforms, b.world.platforms);
        assert_eq!(a.world.coins, b.world.coins);
    }
}
