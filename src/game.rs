//! Frame controller
//!
//! Owns one `GameState` and everything around it that is not simulation:
//! the input queue, held keys, the leaderboard and who is playing.

use std::sync::mpsc::{self, Receiver, Sender};

use chrono::Utc;

use crate::leaderboard::{Leaderboard, ScoreRecord};
use crate::persistence::{Identity, Store};
use crate::platform::{InputEvent, KeyState};
use crate::renderer::Renderer;
use crate::sim::{GameEvent, GameState, SaveReason, Snapshot, tick};
use crate::tuning::Tuning;

pub struct Game<S: Store, I: Identity> {
    state: GameState,
    keys: KeyState,
    input_tx: Sender<InputEvent>,
    input_rx: Receiver<InputEvent>,
    leaderboard: Leaderboard<S>,
    identity: I,
}

impl<S: Store, I: Identity> Game<S, I> {
    pub fn new(tuning: Tuning, seed: u64, now_ms: f64, store: S, identity: I) -> Self {
        let (input_tx, input_rx) = mpsc::channel();
        log::info!("New game, seed {seed}");
        Self {
            state: GameState::new(tuning, seed, now_ms),
            keys: KeyState::new(),
            input_tx,
            input_rx,
            leaderboard: Leaderboard::new(store),
            identity,
        }
    }

    /// Producer end of the input queue, for host event handlers
    pub fn input_sender(&self) -> Sender<InputEvent> {
        self.input_tx.clone()
    }

    /// Queue an input event for the next frame
    pub fn handle_event(&self, event: InputEvent) {
        // The receiver lives in `self`, so the send cannot fail here
        let _ = self.input_tx.send(event);
    }

    /// Drain queued input, advance one tick and act on its events.
    /// Returns the events the tick produced.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        for event in self.input_rx.try_iter() {
            self.keys.apply(event);
        }
        let input = self.keys.take_input();

        tick(&mut self.state, &input, now_ms);

        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::SaveRequested {
                reason,
                score,
                time_secs,
            } = *event
            {
                self.save_score(reason, score, time_secs);
            }
        }
        events
    }

    /// Update, then draw the post-update state
    pub fn run_frame(&mut self, now_ms: f64, renderer: &mut impl Renderer) -> Vec<GameEvent> {
        let events = self.frame(now_ms);
        renderer.render(&self.snapshot());
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.leaderboard
    }

    pub fn identity_mut(&mut self) -> &mut I {
        &mut self.identity
    }

    /// Fire-and-forget: failures are logged, never surfaced to gameplay
    fn save_score(&mut self, reason: SaveReason, score: u64, time_secs: f32) {
        let Some(username) = self.identity.current_user() else {
            log::warn!("No signed-in user, skipping {reason:?} save of {score}");
            return;
        };

        let record = ScoreRecord::new(username, score, time_secs, Utc::now());
        match self.leaderboard.upsert_if_better(record) {
            Ok(true) => log::debug!("{reason:?} save stored: {score} in {time_secs:.1}s"),
            Ok(false) => log::debug!("{reason:?} save of {score} did not beat the stored best"),
            Err(e) => log::warn!("Failed to save score: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{FixedIdentity, MemoryStore, SessionIdentity};
    use crate::platform::Key;
    use crate::renderer::HudRenderer;
    use crate::sim::GamePhase;
    use crate::sim::world::{Coin, Platform};

    type TestGame = Game<MemoryStore, FixedIdentity>;

    /// Robot blind, ground only, no coins
    fn quiet_game() -> TestGame {
        let mut game = Game::new(
            Tuning::default(),
            7,
            0.0,
            MemoryStore::new(),
            FixedIdentity("alice".into()),
        );
        let state = game.state_mut();
        state.robot.detection_range = 0.0;
        state.world.platforms = vec![Platform::new(0.0, 550.0, 800.0, 50.0)];
        state.world.coins.clear();
        state.player.land_on(550.0);
        game
    }

    fn push_off_screen(game: &mut TestGame) {
        game.state_mut().player.y = 700.0;
        game.state_mut().player.is_on_ground = false;
    }

    #[test]
    fn test_game_over_saves_record() {
        let mut game = quiet_game();
        game.state_mut().score = 400;
        push_off_screen(&mut game);

        let events = game.frame(1500.0);
        assert!(events.contains(&GameEvent::FellOut));
        assert_eq!(game.state().phase, GamePhase::GameOver);

        let best = game.leaderboard().best_for("alice").unwrap();
        assert_eq!(best.score, 400);
        assert!((best.time - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_no_user_skips_save() {
        let mut game = Game::new(
            Tuning::default(),
            7,
            0.0,
            MemoryStore::new(),
            SessionIdentity::new(MemoryStore::new()),
        );
        game.state_mut().player.y = 700.0;
        game.frame(16.0);

        assert_eq!(game.state().phase, GamePhase::GameOver);
        assert!(game.leaderboard().load().is_empty());
    }

    #[test]
    fn test_session_user_receives_save() {
        let mut game = Game::new(
            Tuning::default(),
            7,
            0.0,
            MemoryStore::new(),
            SessionIdentity::new(MemoryStore::new()),
        );
        game.identity_mut().sign_in("carol").unwrap();
        game.state_mut().score = 100;
        game.state_mut().player.y = 700.0;
        game.frame(16.0);

        assert_eq!(game.leaderboard().best_for("carol").unwrap().score, 100);
    }

    #[test]
    fn test_checkpoint_save_mid_episode() {
        let mut game = quiet_game();
        let state = game.state_mut();
        state.total_coins = 50;
        state.coins_collected = 9;
        state.score = 900;
        let c = state.player.center();
        state.world.coins = vec![Coin::new(c.x, c.y, 12.0), Coin::new(700.0, 100.0, 12.0)];

        let events = game.frame(16.0);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::SaveRequested {
                reason: SaveReason::Checkpoint,
                score: 1000,
                ..
            }
        )));
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.leaderboard().best_for("alice").unwrap().score, 1000);
    }

    #[test]
    fn test_worse_episode_keeps_best() {
        let mut game = quiet_game();
        game.state_mut().score = 500;
        push_off_screen(&mut game);
        game.frame(16.0);

        game.handle_event(InputEvent::Pressed(Key::Restart));
        let events = game.frame(32.0);
        assert!(events.contains(&GameEvent::Restarted));
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().score, 0);

        game.state_mut().score = 200;
        push_off_screen(&mut game);
        game.frame(48.0);

        assert_eq!(game.leaderboard().best_for("alice").unwrap().score, 500);
        assert_eq!(game.leaderboard().load().len(), 1);
    }

    #[test]
    fn test_restart_after_win_through_keys() {
        let mut game = quiet_game();
        let state = game.state_mut();
        state.total_coins = 1;
        let c = state.player.center();
        state.world.coins = vec![Coin::new(c.x, c.y, 12.0)];

        let events = game.frame(16.0);
        assert!(events.contains(&GameEvent::Won));
        assert_eq!(game.state().phase, GamePhase::Won);
        assert_eq!(game.leaderboard().best_for("alice").unwrap().score, 100);

        game.handle_event(InputEvent::Pressed(Key::Restart));
        let events = game.frame(32.0);
        assert!(events.contains(&GameEvent::Restarted));
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert!(!game.state().score_saved);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().coins_collected, 0);
    }

    #[test]
    fn test_pause_through_sender() {
        let mut game = quiet_game();
        let tx = game.input_sender();

        tx.send(InputEvent::Pressed(Key::Pause)).unwrap();
        tx.send(InputEvent::Released(Key::Pause)).unwrap();
        game.frame(1000.0);
        assert_eq!(game.state().phase, GamePhase::Paused);
        assert_eq!(game.state().game_time, 0.0);

        // Long pause, then resume: paused time is not counted
        tx.send(InputEvent::Pressed(Key::Pause)).unwrap();
        game.frame(9000.0);
        assert_eq!(game.state().phase, GamePhase::Playing);
        game.frame(9500.0);
        assert!((game.state().game_time - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_held_key_moves_player() {
        let mut game = quiet_game();
        let start_x = game.state().player.x;

        game.handle_event(InputEvent::Pressed(Key::Right));
        game.frame(16.0);
        game.frame(32.0);
        assert_eq!(game.state().player.x, start_x + 10.0);

        game.handle_event(InputEvent::Released(Key::Right));
        game.frame(48.0);
        assert_eq!(game.state().player.x, start_x + 10.0);
    }

    #[test]
    fn test_run_frame_renders_post_update_state() {
        let mut game = quiet_game();
        let mut hud = HudRenderer::new();
        game.state_mut().score = 300;
        push_off_screen(&mut game);

        game.run_frame(16.0, &mut hud);
        assert_eq!(hud.frames(), 1);
        assert_eq!(hud.overlay()[0], "GAME OVER");
        assert_eq!(hud.overlay()[1], "Score: 300");
    }
}
