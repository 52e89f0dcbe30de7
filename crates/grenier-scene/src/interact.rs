//! Proximity-gated click interaction.
//!
//! A click rotates the interactable by a fixed step when the viewer stands
//! close enough. Out-of-range and missing-prop clicks are quiet no-ops; the
//! frame loop has no failure path here.

use crate::interactable::InteractableRegistry;
use glam::Vec3;
use std::f32::consts::FRAC_PI_4;
use tracing::debug;

/// Maximum distance at which a click reaches the prop. Inclusive.
pub const PROXIMITY_RANGE: f32 = 3.0;

/// Rotation added per successful click, radians (an eighth of a turn).
pub const ROTATION_STEP: f32 = FRAC_PI_4;

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// The prop was in range and rotated.
    Rotated {
        /// Viewer-to-prop distance at click time.
        distance: f32,
        /// The prop's rotation after the step was applied.
        rotation: f32,
    },
    /// The prop exists but was too far away.
    OutOfRange {
        /// Viewer-to-prop distance at click time.
        distance: f32,
    },
    /// No interactable ever loaded.
    NoInteractable,
}

/// Handle a discrete click from the viewer position.
///
/// Distance exactly at [`PROXIMITY_RANGE`] counts as in range. The rotation
/// accumulates without clamping; multi-turn values are expected and handled
/// by the resting check.
pub fn handle_click(viewer: Vec3, registry: &mut InteractableRegistry) -> ClickOutcome {
    let Some(prop) = registry.active_mut() else {
        debug!("click ignored: no interactable loaded");
        return ClickOutcome::NoInteractable;
    };

    let distance = viewer.distance(prop.position);
    if distance <= PROXIMITY_RANGE {
        prop.rotation += ROTATION_STEP;
        debug!(
            "prop rotated to {:.3} rad ({distance:.2} away)",
            prop.rotation
        );
        ClickOutcome::Rotated {
            distance,
            rotation: prop.rotation,
        }
    } else {
        debug!("click out of range ({distance:.2} > {PROXIMITY_RANGE})");
        ClickOutcome::OutOfRange { distance }
    }
}
