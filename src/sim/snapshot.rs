//! Read-only per-frame view for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::geometry::{Circle, Rect};
use super::state::{GamePhase, GameState};

/// Beam geometry as drawn
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BeamView {
    pub origin: Vec2,
    pub center_angle: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub half_width: f32,
    pub range: f32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RobotView {
    pub body: Circle,
    pub beam: BeamView,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerView {
    pub body: Rect,
    pub detected: bool,
    pub on_ground: bool,
    pub dropping: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub coins_collected: u32,
    pub total_coins: u32,
    pub elapsed_secs: f32,
    pub level: u32,
    pub player: PlayerView,
    pub platforms: Vec<Rect>,
    /// Uncollected coins only
    pub coins: Vec<Circle>,
    pub robot: RobotView,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let beam = state.robot.beam();
        Self {
            phase: state.phase,
            score: state.score,
            coins_collected: state.coins_collected,
            total_coins: state.total_coins,
            elapsed_secs: state.game_time,
            level: state.level,
            player: PlayerView {
                body: state.player.bounds(),
                detected: state.player.is_detected,
                on_ground: state.player.is_on_ground,
                dropping: state.player.is_dropping,
            },
            platforms: state.world.platforms.iter().map(|p| p.bounds()).collect(),
            coins: state.world.active_coins().map(|c| c.circle()).collect(),
            robot: RobotView {
                body: Circle::new(state.robot.pivot(), state.robot.radius),
                beam: BeamView {
                    origin: beam.origin,
                    center_angle: beam.center_angle,
                    start_angle: beam.start_angle(),
                    end_angle: beam.end_angle(),
                    half_width: beam.half_width(),
                    range: beam.range,
                },
            },
        }
    }
}
