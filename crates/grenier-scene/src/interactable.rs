//! The interactable prop and its registry.
//!
//! At most one interactable exists per session. It appears when the scene
//! loader reports success; a load failure is logged and leaves the registry
//! empty, turning every interactable-dependent operation into a permanent
//! no-op for the session.

use glam::Vec3;
use std::f32::consts::TAU;
use tracing::{info, warn};

/// How close to a whole turn (radians) still counts as resting.
pub const RESTING_EPSILON: f32 = 0.01;

/// The one clickable prop in the scene.
///
/// `rotation` accumulates without clamping as the prop is turned; the
/// baseline captured at construction never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Interactable {
    /// World position. Static for the session.
    pub position: Vec3,
    /// Current rotation around the prop's turn axis, radians. Unbounded.
    pub rotation: f32,
    original_rotation: f32,
}

impl Interactable {
    /// Create a prop at `position`, capturing `rotation` as the permanent
    /// baseline.
    #[must_use]
    pub fn new(position: Vec3, rotation: f32) -> Self {
        Self {
            position,
            rotation,
            original_rotation: rotation,
        }
    }

    /// The rotation captured at creation.
    #[must_use]
    pub fn baseline(&self) -> f32 {
        self.original_rotation
    }

    /// Check-and-snap resting test.
    ///
    /// Takes the rotation's offset from the baseline modulo a full turn; if
    /// the remainder is within [`RESTING_EPSILON`] of a whole turn, snaps the
    /// stored rotation back to the baseline and returns `true`. This is a
    /// query that mutates on success, by contract: reporting "resting" and
    /// absorbing accumulated float drift are one operation. Returns `false`
    /// and leaves the rotation untouched otherwise.
    pub fn settle_if_resting(&mut self) -> bool {
        let remainder = (self.rotation - self.original_rotation).rem_euclid(TAU);
        let off_turn = remainder.min(TAU - remainder);
        if off_turn < RESTING_EPSILON {
            self.rotation = self.original_rotation;
            true
        } else {
            false
        }
    }
}

/// Outcome of the asynchronous scene load, delivered once at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// The prop's asset finished loading with its placement applied.
    InteractableReady(Interactable),
    /// The asset could not be loaded. Never retried.
    LoadFailed(String),
}

/// Holds the zero-or-one active interactable.
#[derive(Debug, Clone, Default)]
pub struct InteractableRegistry {
    active: Option<Interactable>,
}

impl InteractableRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a loader outcome. Failure is logged and leaves the registry
    /// empty; there is no retry path.
    pub fn apply(&mut self, event: SceneEvent) {
        match event {
            SceneEvent::InteractableReady(prop) => {
                info!(
                    "interactable ready at ({:.2}, {:.2}, {:.2})",
                    prop.position.x, prop.position.y, prop.position.z
                );
                self.active = Some(prop);
            }
            SceneEvent::LoadFailed(reason) => {
                warn!("interactable load failed, interaction disabled: {reason}");
            }
        }
    }

    /// The active interactable, if one loaded.
    #[must_use]
    pub fn active(&self) -> Option<&Interactable> {
        self.active.as_ref()
    }

    /// Mutable access for interaction and the resting check.
    pub fn active_mut(&mut self) -> Option<&mut Interactable> {
        self.active.as_mut()
    }

    /// `true` when no interactable ever loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_baseline_captured_at_creation() {
        let prop = Interactable::new(Vec3::ZERO, 1.25);
        assert_eq!(prop.baseline(), 1.25);
        assert_eq!(prop.rotation, 1.25);
    }

    #[test]
    fn test_fresh_prop_is_resting() {
        let mut prop = Interactable::new(Vec3::ZERO, 0.5);
        assert!(prop.settle_if_resting());
        assert_eq!(prop.rotation, 0.5);
    }

    #[test]
    fn test_quarter_turn_is_not_resting() {
        let mut prop = Interactable::new(Vec3::ZERO, 0.0);
        prop.rotation += 2.0 * FRAC_PI_4;
        assert!(!prop.settle_if_resting());
        // Not resting: rotation untouched.
        assert!((prop.rotation - 2.0 * FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_full_turn_snaps_back_to_baseline() {
        let mut prop = Interactable::new(Vec3::ZERO, 0.3);
        for _ in 0..8 {
            prop.rotation += FRAC_PI_4;
        }
        assert!(prop.settle_if_resting());
        assert_eq!(prop.rotation, prop.baseline());
    }

    #[test]
    fn test_multi_turn_values_settle() {
        let mut prop = Interactable::new(Vec3::ZERO, 0.0);
        // Two whole turns plus drift just under the epsilon.
        prop.rotation = 2.0 * TAU + 0.009;
        assert!(prop.settle_if_resting());
        assert_eq!(prop.rotation, 0.0);
    }

    #[test]
    fn test_drift_below_a_whole_turn_settles() {
        let mut prop = Interactable::new(Vec3::ZERO, 0.0);
        prop.rotation = TAU - 0.005;
        assert!(prop.settle_if_resting());
        assert_eq!(prop.rotation, 0.0);
    }

    #[test]
    fn test_drift_at_epsilon_does_not_settle() {
        let mut prop = Interactable::new(Vec3::ZERO, 0.0);
        prop.rotation = 0.011;
        assert!(!prop.settle_if_resting());
    }

    #[test]
    fn test_registry_starts_empty() {
        let reg = InteractableRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.active().is_none());
    }

    #[test]
    fn test_registry_ready_event_registers() {
        let mut reg = InteractableRegistry::new();
        reg.apply(SceneEvent::InteractableReady(Interactable::new(
            Vec3::new(-5.0, 1.0, 0.0),
            0.0,
        )));
        assert!(!reg.is_empty());
        assert_eq!(reg.active().unwrap().position, Vec3::new(-5.0, 1.0, 0.0));
    }

    #[test]
    fn test_registry_load_failure_stays_empty() {
        let mut reg = InteractableRegistry::new();
        reg.apply(SceneEvent::LoadFailed("missing file".to_string()));
        assert!(reg.is_empty());
    }
}
