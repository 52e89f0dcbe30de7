//! Per-frame status text derived from walker state.
//!
//! Four display regions are refreshed once per frame: viewer position, look
//! orientation, the interactable (distance plus resting state), and the lamp
//! state. Everything is 2-decimal fixed formatting. The regions must exist
//! before the frame loop starts; a missing region is a startup configuration
//! error, never a per-frame one.

use glam::Vec3;
use grenier_player::WalkRig;
use grenier_scene::{InteractableRegistry, LampPair};
use std::fmt;

/// The four status regions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Viewer position line.
    Position,
    /// Look orientation line.
    Orientation,
    /// Interactable distance and resting state. Empty while nothing loaded.
    Interactable,
    /// Lamp on/off line.
    Lamps,
}

impl Region {
    /// All regions, in display order.
    pub const ALL: [Region; 4] = [
        Region::Position,
        Region::Orientation,
        Region::Interactable,
        Region::Lamps,
    ];

    fn index(self) -> usize {
        match self {
            Region::Position => 0,
            Region::Orientation => 1,
            Region::Interactable => 2,
            Region::Lamps => 3,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Position => "position",
            Region::Orientation => "orientation",
            Region::Interactable => "interactable",
            Region::Lamps => "lamps",
        };
        f.write_str(name)
    }
}

/// Status-surface configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The display did not provide one of the required regions.
    #[error("missing display region: {0}")]
    MissingRegion(Region),
}

/// The four text regions the reporter writes into.
///
/// Constructed once at startup from the regions the display actually
/// provides; construction fails fast if any required region is absent.
#[derive(Debug, Clone)]
pub struct StatusSurface {
    text: [String; 4],
}

impl StatusSurface {
    /// Build the surface, verifying every required region is available.
    pub fn new(available: &[Region]) -> Result<Self, SurfaceError> {
        for required in Region::ALL {
            if !available.contains(&required) {
                return Err(SurfaceError::MissingRegion(required));
            }
        }
        Ok(Self {
            text: [const { String::new() }; 4],
        })
    }

    /// Replace a region's text.
    pub fn set(&mut self, region: Region, text: String) {
        self.text[region.index()] = text;
    }

    /// Read a region's current text.
    #[must_use]
    pub fn get(&self, region: Region) -> &str {
        &self.text[region.index()]
    }

    /// Join the non-empty regions into a single presentation line.
    #[must_use]
    pub fn compose(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(4);
        for region in Region::ALL {
            let text = self.get(region);
            if !text.is_empty() {
                parts.push(text);
            }
        }
        parts.join(" | ")
    }
}

/// Refresh all four regions from current state.
///
/// The interactable region runs the check-and-snap resting test, so this is
/// the one place per frame where querying status can mutate domain state
/// (snapping a whole-turn rotation back to its baseline).
pub fn update_status(
    surface: &mut StatusSurface,
    rig: &WalkRig,
    registry: &mut InteractableRegistry,
    lamps: &LampPair,
) {
    surface.set(Region::Position, format_position(rig.position));
    surface.set(Region::Orientation, format_orientation(rig.orientation()));

    let prop_line = match registry.active_mut() {
        Some(prop) => {
            let distance = rig.position.distance(prop.position);
            let resting = prop.settle_if_resting();
            format_interactable(distance, resting)
        }
        None => String::new(),
    };
    surface.set(Region::Interactable, prop_line);
    surface.set(Region::Lamps, format_lamps(lamps.is_lit()));
}

/// `Position: (1.00, 2.00, -3.33)`
#[must_use]
pub fn format_position(position: Vec3) -> String {
    format!(
        "Position: ({:.2}, {:.2}, {:.2})",
        position.x, position.y, position.z
    )
}

/// `Orientation: (0.00, 1.57, 0.00)` (pitch, yaw, roll in radians).
#[must_use]
pub fn format_orientation(angles: Vec3) -> String {
    format!(
        "Orientation: ({:.2}, {:.2}, {:.2})",
        angles.x, angles.y, angles.z
    )
}

/// `Prop: 2.41 away, resting` / `Prop: 2.41 away, not resting`
#[must_use]
pub fn format_interactable(distance: f32, resting: bool) -> String {
    let state = if resting { "resting" } else { "not resting" };
    format!("Prop: {distance:.2} away, {state}")
}

/// `Lamps: on` / `Lamps: off`
#[must_use]
pub fn format_lamps(lit: bool) -> String {
    format!("Lamps: {}", if lit { "on" } else { "off" })
}
