//! Platform-independent key events.
//!
//! [`RawKeyEvent`] is the minimal slice of a winit [`KeyEvent`] the walker
//! consumes. Controllers take raw events so tests can synthesize keyboard
//! input without a windowing system.
//!
//! Physical key codes are used throughout so the bindings work identically
//! regardless of the user's keyboard layout.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Minimal description of a key event for processing.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is an OS auto-repeat of a held key.
    ///
    /// Repeats are delivered, not filtered: held-flag updates are idempotent
    /// anyway, and the lamp toggle deliberately fires on every down event.
    pub repeat: bool,
}

impl RawKeyEvent {
    /// Extract the relevant fields from a winit [`KeyEvent`].
    #[must_use]
    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        }
    }

    /// Returns `true` for a key-down event (first press or repeat).
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.state == ElementState::Pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_is_down_matches_state() {
        let down = RawKeyEvent {
            key: PhysicalKey::Code(KeyCode::KeyW),
            state: ElementState::Pressed,
            repeat: false,
        };
        let up = RawKeyEvent {
            key: PhysicalKey::Code(KeyCode::KeyW),
            state: ElementState::Released,
            repeat: false,
        };
        assert!(down.is_down());
        assert!(!up.is_down());
    }

    #[test]
    fn test_repeat_is_still_down() {
        let repeat = RawKeyEvent {
            key: PhysicalKey::Code(KeyCode::KeyC),
            state: ElementState::Pressed,
            repeat: true,
        };
        assert!(repeat.is_down());
    }
}
