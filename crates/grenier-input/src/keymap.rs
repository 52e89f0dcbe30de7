//! Action keymap: physical keys mapped to walker actions.
//!
//! [`KeyMap`] holds the binding table and resolves incoming key codes.
//! Defaults match the attic walkthrough's bindings by physical position
//! (the original was authored against an AZERTY layout; physical codes make
//! the same positions work everywhere). Bindings can be overridden from the
//! configuration file by action and key name.

use std::collections::HashMap;
use tracing::warn;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Actions the walker responds to.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum WalkerAction {
    /// Walk along the look direction.
    Forward,
    /// Walk against the look direction.
    Backward,
    /// Strafe left.
    StrafeLeft,
    /// Strafe right.
    StrafeRight,
    /// Rise straight up.
    Ascend,
    /// Sink straight down.
    Descend,
    /// Toggle the lamp pair.
    ToggleLamps,
}

impl WalkerAction {
    /// All actions, in binding-table order.
    pub const ALL: [WalkerAction; 7] = [
        WalkerAction::Forward,
        WalkerAction::Backward,
        WalkerAction::StrafeLeft,
        WalkerAction::StrafeRight,
        WalkerAction::Ascend,
        WalkerAction::Descend,
        WalkerAction::ToggleLamps,
    ];

    /// Whether this action is a held movement intent rather than a discrete
    /// trigger.
    #[must_use]
    pub fn is_movement(self) -> bool {
        !matches!(self, WalkerAction::ToggleLamps)
    }

    /// Parse the config-facing action name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "forward" => WalkerAction::Forward,
            "backward" => WalkerAction::Backward,
            "strafe_left" => WalkerAction::StrafeLeft,
            "strafe_right" => WalkerAction::StrafeRight,
            "ascend" => WalkerAction::Ascend,
            "descend" => WalkerAction::Descend,
            "toggle_lamps" => WalkerAction::ToggleLamps,
            _ => return None,
        })
    }
}

/// Binding table from physical keys to walker actions.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyCode, WalkerAction>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(KeyCode::KeyW, WalkerAction::Forward);
        bindings.insert(KeyCode::KeyS, WalkerAction::Backward);
        bindings.insert(KeyCode::KeyA, WalkerAction::StrafeLeft);
        bindings.insert(KeyCode::KeyD, WalkerAction::StrafeRight);
        bindings.insert(KeyCode::KeyE, WalkerAction::Ascend);
        bindings.insert(KeyCode::KeyQ, WalkerAction::Descend);
        bindings.insert(KeyCode::KeyC, WalkerAction::ToggleLamps);
        Self { bindings }
    }
}

impl KeyMap {
    /// Resolve a physical key to its bound action, if any.
    ///
    /// Unknown and unbound keys resolve to `None`; the caller ignores them.
    #[must_use]
    pub fn resolve(&self, key: PhysicalKey) -> Option<WalkerAction> {
        match key {
            PhysicalKey::Code(code) => self.bindings.get(&code).copied(),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    /// Rebind an action to a key, removing the action's previous bindings.
    pub fn bind(&mut self, key: KeyCode, action: WalkerAction) {
        self.bindings.retain(|_, bound| *bound != action);
        self.bindings.insert(key, action);
    }

    /// Apply configuration overrides (`action name -> key name`).
    ///
    /// Unknown action or key names are logged and skipped; the default
    /// binding for that action stays in place.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) {
        for (action_name, key_name) in overrides {
            let Some(action) = WalkerAction::from_name(action_name) else {
                warn!("unknown action in keybinding override: {action_name}");
                continue;
            };
            let Some(code) = keycode_from_name(key_name) else {
                warn!("unknown key in keybinding override: {key_name}");
                continue;
            };
            self.bind(code, action);
        }
    }
}

/// Parse a key-code name matching the `Debug` output of [`KeyCode`]
/// (e.g. `"KeyW"`, `"Digit1"`, `"Space"`).
fn keycode_from_name(s: &str) -> Option<KeyCode> {
    Some(match s {
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        "Digit0" => KeyCode::Digit0,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        "Digit5" => KeyCode::Digit5,
        "Digit6" => KeyCode::Digit6,
        "Digit7" => KeyCode::Digit7,
        "Digit8" => KeyCode::Digit8,
        "Digit9" => KeyCode::Digit9,
        "Space" => KeyCode::Space,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        _ => return None,
    })
}
