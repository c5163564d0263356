//! Per-frame simulation step
//!
//! Order within a playing tick: timers, input, player integration, platform
//! landing, coin pickup, robot sweep + detection, difficulty escalation.
//! A terminal transition ends the tick immediately.

use super::collision::{resolve_platforms, touches_coin};
use super::state::{GameEvent, GamePhase, GameState, SaveReason};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held: move left
    pub left: bool,
    /// Held: move right
    pub right: bool,
    /// Pressed this frame: jump / air jump
    pub jump: bool,
    /// Pressed this frame: drop through the platform underfoot
    pub drop: bool,
    /// Pressed this frame: pause toggle
    pub pause: bool,
    /// Pressed this frame: restart (terminal phases only)
    pub restart: bool,
}

/// Advance the game state by one frame. `now_ms` is a monotonic wall-clock
/// reading; game time grows by the gap since the previous counted frame.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if input.restart && state.phase.is_terminal() {
        state.restart(now_ms);
        state.push_event(GameEvent::Restarted);
        log::info!("Restarted (seed {})", state.seed);
        return;
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.push_event(GameEvent::Paused);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                // Paused wall-clock time never reaches game_time
                state.last_frame_ms = now_ms;
                state.push_event(GameEvent::Resumed);
            }
            _ => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    advance_clock(state, now_ms);
    state.player.poll_timers(now_ms);

    // Input
    state.player.apply_horizontal_input(input.left, input.right);
    if input.jump {
        state.player.jump();
    }
    if input.drop {
        state.player.drop_down(now_ms);
    }

    // Physics
    let step = state.player.update(&state.tuning.arena);
    if step.fell_out {
        log::info!("Fell out at {:.1}s, score {}", state.game_time, state.score);
        state.push_event(GameEvent::FellOut);
        state.end_episode(GamePhase::GameOver);
        return;
    }

    resolve_platforms(&mut state.player, &state.world.platforms);

    collect_coins(state);
    if state.phase != GamePhase::Playing {
        return;
    }

    // Detection
    let seen = state.robot.update(state.player.center());
    state.player.is_detected = seen;
    if seen {
        log::info!("Spotted at {:.1}s, score {}", state.game_time, state.score);
        state.push_event(GameEvent::Detected);
        state.end_episode(GamePhase::GameOver);
        return;
    }

    check_level_up(state);
}

fn advance_clock(state: &mut GameState, now_ms: f64) {
    let dt = ((now_ms - state.last_frame_ms) / 1000.0).max(0.0) as f32;
    state.game_time += dt;
    state.last_frame_ms = now_ms;
}

/// Pick up every touched coin; may end the episode with a win
fn collect_coins(state: &mut GameState) {
    let value = state.tuning.scoring.coin_value;
    let every = state.tuning.scoring.checkpoint_every;

    for i in 0..state.world.coins.len() {
        if !touches_coin(&state.player, &state.world.coins[i]) {
            continue;
        }
        state.world.coins[i].collected = true;
        state.coins_collected += 1;
        state.score += value;
        state.push_event(GameEvent::CoinCollected {
            total: state.coins_collected,
        });
        log::debug!(
            "Coin {}/{} collected, score {}",
            state.coins_collected,
            state.total_coins,
            state.score
        );

        // The winning coin's save is the episode-end save
        if state.coins_collected >= state.total_coins {
            log::info!("Won at {:.1}s, score {}", state.game_time, state.score);
            state.push_event(GameEvent::Won);
            state.end_episode(GamePhase::Won);
            return;
        }

        if every > 0 && state.coins_collected.is_multiple_of(every) {
            log::debug!("Checkpoint save at {} coins", state.coins_collected);
            state.request_save(SaveReason::Checkpoint);
        }
    }

    if !state.world.coins.is_empty() && state.world.all_coins_collected() {
        let count = state.respawn_coins();
        state.push_event(GameEvent::CoinsRespawned { count });
    }
}

/// One-shot switch to level 2 once enough game time has passed
fn check_level_up(state: &mut GameState) {
    let levels = &state.tuning.levels;
    if state.level_two_active || state.game_time < levels.level_two_after_secs {
        return;
    }
    let multiplier = levels.detection_speed_multiplier;

    state.level_two_active = true;
    state.level = 2;
    state.robot.speed_up(multiplier);
    state.regenerate_world();
    state.total_coins = state.tuning.levels.tier(state.level).coins;
    state.score += state.tuning.scoring.level_bonus;
    state.push_event(GameEvent::LevelUp { level: state.level });
    log::info!(
        "Level {} at {:.1}s: beam speed {:.4}, target {} coins",
        state.level,
        state.game_time,
        state.robot.detection_speed,
        state.total_coins
    );
}
