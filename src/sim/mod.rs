//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only arrives as an explicit `now_ms` argument
//! - Seeded RNG only
//! - Stable iteration order (platforms and coins in generation order)
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod cone;
pub mod geometry;
pub mod player;
pub mod robot;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod timer;
pub mod world;

pub use collision::{lands_on, resolve_platforms, touches_coin};
pub use cone::DetectionCone;
pub use geometry::{Circle, Rect, circle_contains, distance, rect_overlap};
pub use player::Player;
pub use robot::{Robot, SweepDirection};
pub use snapshot::Snapshot;
pub use state::{GameEvent, GamePhase, GameState, SaveReason};
pub use tick::{TickInput, tick};
pub use timer::Deferred;
pub use world::{Coin, Platform, World};
