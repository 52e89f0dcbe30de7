//! Per-tick movement application.
//!
//! Each held intent flag issues exactly one rig command with a fixed
//! per-tick magnitude. No acceleration, no collision, no normalization of
//! diagonals: two held flags displace along both axes at full speed, and
//! opposite flags cancel exactly because the commands are additive.

use crate::rig::WalkRig;
use grenier_input::MoveIntent;

/// Movement speed constants, per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// Horizontal speed per tick (forward/backward/strafe).
    pub walk_speed: f32,
    /// Vertical speed per tick. Tuned lower than horizontal.
    pub vertical_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 0.2,
            vertical_speed: 0.1,
        }
    }
}

/// Apply one tick of movement for every held flag, in fixed order:
/// forward, backward, left, right, up, down.
pub fn apply_movement(intent: &MoveIntent, config: &MovementConfig, rig: &mut WalkRig) {
    if intent.forward {
        rig.move_forward(config.walk_speed);
    }
    if intent.backward {
        rig.move_forward(-config.walk_speed);
    }
    if intent.left {
        rig.move_right(-config.walk_speed);
    }
    if intent.right {
        rig.move_right(config.walk_speed);
    }
    if intent.up {
        rig.move_vertical(config.vertical_speed);
    }
    if intent.down {
        rig.move_vertical(-config.vertical_speed);
    }
}
