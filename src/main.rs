//! Beam Runner entry point
//!
//! Headless driver: a scripted autopilot plays simulated 60 fps frames
//! against the library and logs the HUD and the leaderboard.
//!
//! Environment:
//! - `BEAM_RUNNER_DATA`: data directory for the leaderboard (in-memory if unset)
//! - `BEAM_RUNNER_USER`: name scores are saved under (default `player`)
//! - `BEAM_RUNNER_SEED`: world seed (random if unset)
//! - `BEAM_RUNNER_FRAMES`: frames to simulate (default 5400)
//! - `BEAM_RUNNER_TUNING`: balance file, see `Tuning::load`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use beam_runner::Game;
    use beam_runner::persistence::{FileStore, FixedIdentity, MemoryStore, Store};
    use beam_runner::platform::{Clock, InputEvent, Key, ManualClock, SystemClock};
    use beam_runner::renderer::HudRenderer;
    use beam_runner::sim::{GameEvent, GamePhase, Snapshot};
    use beam_runner::tuning::Tuning;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
        std::env::var(name).ok().and_then(|v| v.parse().ok())
    }

    pub fn run() {
        let tuning = Tuning::load();
        let user = std::env::var("BEAM_RUNNER_USER").unwrap_or_else(|_| "player".to_string());
        let seed = env_parse("BEAM_RUNNER_SEED").unwrap_or_else(rand::random::<u64>);
        let frames = env_parse("BEAM_RUNNER_FRAMES").unwrap_or(5400u32);

        match std::env::var("BEAM_RUNNER_DATA") {
            Ok(dir) => match FileStore::open(&dir) {
                Ok(store) => {
                    log::info!("Leaderboard stored under {}", store.root().display());
                    play(tuning, store, user, seed, frames);
                }
                Err(e) => {
                    log::warn!("Cannot open data directory {dir}: {e}, keeping scores in memory");
                    play(tuning, MemoryStore::new(), user, seed, frames);
                }
            },
            Err(_) => play(tuning, MemoryStore::new(), user, seed, frames),
        }
    }

    fn play<S: Store>(tuning: Tuning, store: S, user: String, seed: u64, frames: u32) {
        let wall = SystemClock::new();
        let clock = ManualClock::new(0.0);
        let mut game = Game::new(tuning, seed, clock.now_ms(), store, FixedIdentity(user));
        let input = game.input_sender();
        let mut hud = HudRenderer::new();
        let mut pilot = Autopilot::default();

        for frame in 0..frames {
            for stroke in pilot.steer(&game.snapshot()) {
                if let Some(event) = stroke.to_input() {
                    // The game owns the receiver for the whole loop
                    let _ = input.send(event);
                }
            }

            clock.advance(FRAME_MS);
            let events = game.run_frame(clock.now_ms(), &mut hud);

            if events
                .iter()
                .any(|e| matches!(e, GameEvent::FellOut | GameEvent::Detected | GameEvent::Won))
            {
                log::info!("{} | {}", hud.status(), hud.overlay().join(" / "));
            } else if frame % 600 == 0 {
                log::info!("{}", hud.status());
            }
        }

        log::info!("Final: {}", hud.status());
        log::info!("Simulated {frames} frames in {:.0} ms", wall.now_ms());
        for (rank, record) in game.leaderboard().top(3).iter().enumerate() {
            log::info!(
                "#{} {} - {} points in {:.0}s ({})",
                rank + 1,
                record.username,
                record.score,
                record.time.floor(),
                record.date.format("%Y-%m-%d")
            );
        }
    }

    /// A keyboard event as a browser would name it
    #[derive(Debug, Clone, Copy)]
    enum Stroke {
        Down(&'static str),
        Up(&'static str),
    }

    impl Stroke {
        fn to_input(self) -> Option<InputEvent> {
            match self {
                Stroke::Down(name) => Key::from_key_name(name).map(InputEvent::Pressed),
                Stroke::Up(name) => Key::from_key_name(name).map(InputEvent::Released),
            }
        }
    }

    /// Chases the nearest coin, jumping up to it or dropping down to it, and
    /// restarts after each episode
    #[derive(Debug, Default)]
    struct Autopilot {
        held: Option<&'static str>,
        tapped: Option<&'static str>,
        wait: u32,
    }

    impl Autopilot {
        fn steer(&mut self, snap: &Snapshot) -> Vec<Stroke> {
            let mut out = Vec::new();
            if let Some(name) = self.tapped.take() {
                out.push(Stroke::Up(name));
            }

            if snap.phase.is_terminal() {
                self.set_held(None, &mut out);
                // Let the overlay sit for a second before restarting
                self.wait += 1;
                if self.wait >= 60 {
                    self.wait = 0;
                    self.tap("r", &mut out);
                }
                return out;
            }
            if snap.phase == GamePhase::Paused {
                return out;
            }

            let body = snap.player.body;
            let me = body.center();
            let Some(target) = snap
                .coins
                .iter()
                .min_by(|a, b| me.distance(a.center).total_cmp(&me.distance(b.center)))
            else {
                self.set_held(None, &mut out);
                return out;
            };

            let dx = target.center.x - me.x;
            let dir = if dx > 8.0 {
                Some("ArrowRight")
            } else if dx < -8.0 {
                Some("ArrowLeft")
            } else {
                None
            };
            self.set_held(dir, &mut out);

            if snap.player.on_ground {
                if target.center.y < body.y - 10.0 {
                    self.tap("ArrowUp", &mut out);
                } else if target.center.y > body.y + body.height + 20.0 {
                    self.tap("ArrowDown", &mut out);
                }
            }
            out
        }

        fn set_held(&mut self, name: Option<&'static str>, out: &mut Vec<Stroke>) {
            if self.held == name {
                return;
            }
            if let Some(old) = self.held.take() {
                out.push(Stroke::Up(old));
            }
            if let Some(new) = name {
                out.push(Stroke::Down(new));
            }
            self.held = name;
        }

        fn tap(&mut self, name: &'static str, out: &mut Vec<Stroke>) {
            out.push(Stroke::Down(name));
            self.tapped = Some(name);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Beam Runner (headless) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts embed `beam_runner::Game` directly and drive it from requestAnimationFrame
}
