//! Text HUD: the status bar plus the pause/game-over/win overlays

use crate::sim::{GamePhase, Snapshot};

use super::Renderer;

/// Keeps the text of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct HudRenderer {
    status: String,
    overlay: Vec<String>,
    frames: u64,
}

impl HudRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Score | Coins a/b | Time Ns | Level L`
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Centre-screen lines, empty while playing
    pub fn overlay(&self) -> &[String] {
        &self.overlay
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for HudRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        self.status = status_line(snapshot);
        self.overlay = overlay_lines(snapshot);
        self.frames += 1;
    }
}

pub fn status_line(snapshot: &Snapshot) -> String {
    format!(
        "Score: {} | Coins: {}/{} | Time: {}s | Level {}",
        snapshot.score,
        snapshot.coins_collected,
        snapshot.total_coins,
        whole_seconds(snapshot.elapsed_secs),
        snapshot.level
    )
}

pub fn overlay_lines(snapshot: &Snapshot) -> Vec<String> {
    match snapshot.phase {
        GamePhase::Playing => Vec::new(),
        GamePhase::Paused => vec!["PAUSED".into(), "Press P to Resume".into()],
        GamePhase::GameOver => vec![
            "GAME OVER".into(),
            format!("Score: {}", snapshot.score),
            "Press R to Restart".into(),
        ],
        GamePhase::Won => vec![
            "YOU WIN!".into(),
            format!("Final Score: {}", snapshot.score),
            format!("Time: {}s", whole_seconds(snapshot.elapsed_secs)),
            "Press R to Restart".into(),
        ],
    }
}

fn whole_seconds(secs: f32) -> u64 {
    secs.max(0.0).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    fn snapshot_with(phase: GamePhase, score: u64, secs: f32) -> Snapshot {
        let mut state = GameState::new(Tuning::default(), 4, 0.0);
        state.phase = phase;
        state.score = score;
        state.game_time = secs;
        state.coins_collected = 3;
        Snapshot::capture(&state)
    }

    #[test]
    fn test_status_floors_timer() {
        let snap = snapshot_with(GamePhase::Playing, 300, 12.99);
        assert_eq!(status_line(&snap), "Score: 300 | Coins: 3/5 | Time: 12s | Level 1");
        assert!(overlay_lines(&snap).is_empty());
    }

    #[test]
    fn test_overlays() {
        let paused = overlay_lines(&snapshot_with(GamePhase::Paused, 0, 1.0));
        assert_eq!(paused[0], "PAUSED");

        let over = overlay_lines(&snapshot_with(GamePhase::GameOver, 700, 5.0));
        assert_eq!(over[0], "GAME OVER");
        assert_eq!(over[1], "Score: 700");

        let won = overlay_lines(&snapshot_with(GamePhase::Won, 1000, 42.7));
        assert_eq!(won[0], "YOU WIN!");
        assert_eq!(won[1], "Final Score: 1000");
        assert_eq!(won[2], "Time: 42s");
    }

    #[test]
    fn test_render_keeps_last_frame() {
        let mut hud = HudRenderer::new();
        hud.render(&snapshot_with(GamePhase::Playing, 0, 0.0));
        hud.render(&snapshot_with(GamePhase::GameOver, 100, 2.0));
        assert_eq!(hud.frames(), 2);
        assert_eq!(hud.overlay()[0], "GAME OVER");
        assert!(hud.status().starts_with("Score: 100"));
    }
}
