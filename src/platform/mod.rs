//! Platform abstraction layer
//!
//! Keeps host differences out of the simulation:
//! - Input events and held-key tracking
//! - Monotonic time

pub mod input;
pub mod time;

pub use input::{InputEvent, Key, KeyState};
pub use time::{Clock, ManualClock, SystemClock};
