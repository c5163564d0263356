//! Rendering surface
//!
//! Renderers only ever see a `Snapshot`; they cannot reach back into the
//! simulation.

pub mod hud;

pub use hud::HudRenderer;

use crate::sim::Snapshot;

/// Draws one frame
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}
