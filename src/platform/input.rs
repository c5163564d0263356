//! Keyboard input
//!
//! Hosts translate their native key events into `InputEvent`s and push them
//! through the controller's channel. `KeyState` turns the drained events into
//! one `TickInput` per frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Jump,
    Drop,
    Pause,
    Restart,
}

impl Key {
    /// Map a DOM-style key name (`KeyboardEvent.key`) to a game key
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "a" | "A" | "ArrowLeft" => Some(Key::Left),
            "d" | "D" | "ArrowRight" => Some(Key::Right),
            "w" | "W" | "ArrowUp" | " " => Some(Key::Jump),
            "s" | "S" | "ArrowDown" => Some(Key::Drop),
            "p" | "P" | "Escape" => Some(Key::Pause),
            "r" | "R" => Some(Key::Restart),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Key),
    Released(Key),
}

/// Held keys plus the presses seen since the last frame
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(key) => {
                self.held.insert(key);
                // Auto-repeat presses count too, like a browser keydown
                self.pressed.insert(key);
            }
            InputEvent::Released(key) => {
                self.held.remove(&key);
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Build this frame's input and clear the edge-triggered presses
    pub fn take_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            jump: self.pressed.contains(&Key::Jump),
            drop: self.pressed.contains(&Key::Drop),
            pause: self.pressed.contains(&Key::Pause),
            restart: self.pressed.contains(&Key::Restart),
        };
        self.pressed.clear();
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_key_name("W"), Some(Key::Jump));
        assert_eq!(Key::from_key_name("p"), Some(Key::Pause));
        assert_eq!(Key::from_key_name("r"), Some(Key::Restart));
        assert_eq!(Key::from_key_name("x"), None);
    }

    #[test]
    fn test_held_keys_persist_across_frames() {
        let mut keys = KeyState::new();
        keys.apply(InputEvent::Pressed(Key::Right));

        assert!(keys.take_input().right);
        assert!(keys.take_input().right);

        keys.apply(InputEvent::Released(Key::Right));
        assert!(!keys.take_input().right);
    }

    #[test]
    fn test_presses_fire_once() {
        let mut keys = KeyState::new();
        keys.apply(InputEvent::Pressed(Key::Jump));
        keys.apply(InputEvent::Released(Key::Jump));

        // A tap between frames still registers
        let first = keys.take_input();
        assert!(first.jump);
        assert!(!first.left);

        assert!(!keys.take_input().jump);
    }
}
