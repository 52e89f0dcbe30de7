//! The walker controller: one object owning every piece of session state.
//!
//! Input events and the frame tick funnel through here. Key events update
//! intent flags or fire the lamp toggle, clicks go through the proximity
//! gate, and the tick applies accumulated look input plus one step of
//! movement. Nothing in this module is module-level state; the controller
//! is constructed once per session and owns all of it.

use grenier_config::Config;
use grenier_hud::StatusSurface;
use grenier_input::{KeyMap, MouseLook, MoveIntent, RawKeyEvent, WalkerAction};
use grenier_player::{MovementConfig, WalkRig, apply_movement};
use grenier_scene::{AudioCue, ClickOutcome, InteractableRegistry, LampPair, SceneEvent, handle_click};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;
use tracing::{debug, trace};

/// Where the player starts: inside the attic door, facing down the room.
const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const SPAWN_YAW: f32 = FRAC_PI_2;

/// Session state and the entry points the shell drives.
pub struct WalkerController<C: AudioCue> {
    keymap: KeyMap,
    intent: MoveIntent,
    look: MouseLook,
    rig: WalkRig,
    movement: MovementConfig,
    registry: InteractableRegistry,
    lamps: LampPair,
    cue: C,
}

impl<C: AudioCue> WalkerController<C> {
    /// Build a controller from configuration, with the registry empty until
    /// the scene loader reports in.
    pub fn new(config: &Config, cue: C) -> Self {
        let mut keymap = KeyMap::default();
        keymap.apply_overrides(&config.input.bindings);

        let rig = WalkRig {
            position: SPAWN_POSITION,
            yaw: SPAWN_YAW,
            mouse_sensitivity: config.movement.mouse_sensitivity,
            ..Default::default()
        };
        let movement = MovementConfig {
            walk_speed: config.movement.walk_speed,
            vertical_speed: config.movement.vertical_speed,
        };

        Self {
            keymap,
            intent: MoveIntent::new(),
            look: MouseLook::new(),
            rig,
            movement,
            registry: InteractableRegistry::new(),
            lamps: LampPair::default(),
            cue,
        }
    }

    /// Feed the scene loader's outcome into the registry.
    pub fn apply_scene_event(&mut self, event: SceneEvent) {
        self.registry.apply(event);
    }

    /// Handle a keyboard event.
    ///
    /// Movement keys set/clear intent flags (idempotently, so repeats are
    /// harmless). The lamp toggle fires on every down event, auto-repeat
    /// included; there is deliberately no debounce.
    pub fn on_key(&mut self, event: RawKeyEvent) {
        let Some(action) = self.keymap.resolve(event.key) else {
            trace!("unmapped key ignored: {:?}", event.key);
            return;
        };

        if action.is_movement() {
            if event.is_down() {
                self.intent.press(action);
            } else {
                self.intent.release(action);
            }
        } else if event.is_down() {
            let lit = self.lamps.toggle(&mut self.cue);
            debug!(
                "lamps toggled {} (repeat: {})",
                if lit { "on" } else { "off" },
                event.repeat
            );
        }
    }

    /// Accumulate raw look motion for the next tick.
    pub fn on_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.look.on_raw_motion(dx, dy);
    }

    /// Track whether the cursor is captured for look input.
    pub fn set_look_captured(&mut self, captured: bool) {
        self.look.set_captured(captured);
    }

    /// Handle a discrete click: proximity-gated prop rotation.
    pub fn on_click(&mut self) -> ClickOutcome {
        handle_click(self.rig.position, &mut self.registry)
    }

    /// Run one frame: apply accumulated look input, then one movement step.
    pub fn tick(&mut self) {
        let delta = self.look.delta();
        self.rig.apply_mouse_delta(delta.x, delta.y);
        self.look.clear_frame();

        apply_movement(&self.intent, &self.movement, &mut self.rig);
    }

    /// Refresh the status regions from current state. Runs the resting
    /// check-and-snap on the interactable.
    pub fn refresh_status(&mut self, surface: &mut StatusSurface) {
        grenier_hud::update_status(surface, &self.rig, &mut self.registry, &self.lamps);
    }

    /// The rig, for status and tests.
    #[must_use]
    pub fn rig(&self) -> &WalkRig {
        &self.rig
    }

    /// The lamp pair.
    #[must_use]
    pub fn lamps(&self) -> &LampPair {
        &self.lamps
    }

    /// The interactable registry.
    #[must_use]
    pub fn registry(&self) -> &InteractableRegistry {
        &self.registry
    }
}
