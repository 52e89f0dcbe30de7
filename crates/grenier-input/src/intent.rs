//! Movement intent flags.
//!
//! [`MoveIntent`] is the walker's answer to "which directions are currently
//! held". Key-down sets a flag, key-up clears it, and nothing else touches
//! them. The flags are deliberately independent: opposite directions may be
//! held at once and the per-tick application order decides the (zero) net
//! effect.

use crate::keymap::WalkerAction;

/// The six directional intents, one per held movement key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    /// Walking along the look direction.
    pub forward: bool,
    /// Walking against the look direction.
    pub backward: bool,
    /// Strafing left.
    pub left: bool,
    /// Strafing right.
    pub right: bool,
    /// Rising straight up.
    pub up: bool,
    /// Sinking straight down.
    pub down: bool,
}

impl MoveIntent {
    /// Creates an intent with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a movement action as held. Idempotent; repeated down events
    /// (including OS auto-repeat) have no additional effect. Non-movement
    /// actions are ignored.
    pub fn press(&mut self, action: WalkerAction) {
        if let Some(flag) = self.flag_mut(action) {
            *flag = true;
        }
    }

    /// Marks a movement action as released.
    pub fn release(&mut self, action: WalkerAction) {
        if let Some(flag) = self.flag_mut(action) {
            *flag = false;
        }
    }

    /// Returns `true` if any direction is held.
    #[must_use]
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up || self.down
    }

    fn flag_mut(&mut self, action: WalkerAction) -> Option<&mut bool> {
        match action {
            WalkerAction::Forward => Some(&mut self.forward),
            WalkerAction::Backward => Some(&mut self.backward),
            WalkerAction::StrafeLeft => Some(&mut self.left),
            WalkerAction::StrafeRight => Some(&mut self.right),
            WalkerAction::Ascend => Some(&mut self.up),
            WalkerAction::Descend => Some(&mut self.down),
            WalkerAction::ToggleLamps => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_nothing_held() {
        let intent = MoveIntent::new();
        assert!(!intent.any());
    }

    #[test]
    fn test_press_sets_only_its_flag() {
        let mut intent = MoveIntent::new();
        intent.press(WalkerAction::Forward);
        assert!(intent.forward);
        assert!(!intent.backward);
        assert!(!intent.left && !intent.right && !intent.up && !intent.down);
    }

    #[test]
    fn test_last_write_wins() {
        let mut intent = MoveIntent::new();
        intent.press(WalkerAction::StrafeLeft);
        intent.release(WalkerAction::StrafeLeft);
        intent.press(WalkerAction::StrafeLeft);
        assert!(intent.left);
        intent.release(WalkerAction::StrafeLeft);
        assert!(!intent.left);
    }

    #[test]
    fn test_repeated_press_is_idempotent() {
        let mut intent = MoveIntent::new();
        intent.press(WalkerAction::Ascend);
        intent.press(WalkerAction::Ascend);
        intent.press(WalkerAction::Ascend);
        assert!(intent.up);
        // One release undoes any number of presses.
        intent.release(WalkerAction::Ascend);
        assert!(!intent.up);
    }

    #[test]
    fn test_opposite_directions_may_both_be_held() {
        let mut intent = MoveIntent::new();
        intent.press(WalkerAction::Forward);
        intent.press(WalkerAction::Backward);
        assert!(intent.forward);
        assert!(intent.backward);
    }

    #[test]
    fn test_toggle_lamps_is_not_an_intent() {
        let mut intent = MoveIntent::new();
        intent.press(WalkerAction::ToggleLamps);
        assert!(!intent.any());
        intent.release(WalkerAction::ToggleLamps);
        assert!(!intent.any());
    }
}
