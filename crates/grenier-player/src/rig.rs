//! The walk rig: position plus look direction, driven by relative commands.
//!
//! [`WalkRig`] is the movable first-person viewpoint. Movement code only
//! issues relative commands against it ([`move_forward`](WalkRig::move_forward),
//! [`move_right`](WalkRig::move_right), [`move_vertical`](WalkRig::move_vertical))
//! or reads/writes the position directly; orientation is derived from yaw and
//! pitch, which mouse look updates.

use glam::{Quat, Vec3};

/// First-person viewpoint state.
#[derive(Clone, Debug)]
pub struct WalkRig {
    /// Position in world space (meters).
    pub position: Vec3,
    /// Horizontal look angle in radians. Positive yaw turns left
    /// (counter-clockwise viewed from above).
    pub yaw: f32,
    /// Vertical look angle in radians. Positive pitch looks up.
    pub pitch: f32,
    /// Mouse sensitivity multiplier applied to raw mouse deltas.
    pub mouse_sensitivity: f32,
    /// Maximum pitch magnitude in radians; pitch is clamped to ±this.
    pub pitch_limit: f32,
}

impl Default for WalkRig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            mouse_sensitivity: 0.003,
            pitch_limit: 89.0_f32.to_radians(),
        }
    }
}

impl WalkRig {
    /// Current orientation as a quaternion: yaw around Y, then pitch around X.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// Current look direction (unit vector, follows pitch).
    #[must_use]
    pub fn look_dir(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Look angles as (pitch, yaw, roll). Roll is always zero for the walk
    /// rig; it is reported so orientation displays stay three-component.
    #[must_use]
    pub fn orientation(&self) -> Vec3 {
        Vec3::new(self.pitch, self.yaw, 0.0)
    }

    /// Apply a raw mouse delta to yaw and pitch, clamping pitch.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.mouse_sensitivity;
        self.pitch -= dy * self.mouse_sensitivity;
        self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Move along the look direction projected onto the horizontal plane.
    /// Pitch never produces vertical drift; walking stays level.
    pub fn move_forward(&mut self, delta: f32) {
        let forward = self.rotation() * Vec3::NEG_Z;
        let horiz = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
        self.position += horiz * delta;
    }

    /// Strafe perpendicular to the look direction, on the horizontal plane.
    pub fn move_right(&mut self, delta: f32) {
        let right = self.rotation() * Vec3::X;
        let horiz = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();
        self.position += horiz * delta;
    }

    /// Offset the rig vertically, bypassing the look direction entirely.
    pub fn move_vertical(&mut self, delta: f32) {
        self.position.y += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_default_rig_looks_along_neg_z() {
        let rig = WalkRig::default();
        let dir = rig.look_dir();
        assert!(dir.x.abs() < 1e-6);
        assert!(dir.y.abs() < 1e-6);
        assert!((dir.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_positive_yaw_turns_left() {
        let rig = WalkRig {
            yaw: FRAC_PI_2,
            ..Default::default()
        };
        let dir = rig.look_dir();
        assert!((dir.x + 1.0).abs() < 1e-6, "quarter turn left faces -X");
        assert!(dir.z.abs() < 1e-6);
    }

    #[test]
    fn test_mouse_delta_moves_yaw_and_pitch() {
        let mut rig = WalkRig::default();
        rig.apply_mouse_delta(100.0, 50.0);
        assert!(rig.yaw < 0.0, "mouse right turns right");
        assert!(rig.pitch < 0.0, "mouse down looks down");
    }

    #[test]
    fn test_pitch_clamps_at_limit() {
        let mut rig = WalkRig::default();
        rig.apply_mouse_delta(0.0, -100_000.0);
        assert!((rig.pitch - rig.pitch_limit).abs() < 1e-6);
        rig.apply_mouse_delta(0.0, 100_000.0);
        assert!((rig.pitch + rig.pitch_limit).abs() < 1e-6);
    }

    #[test]
    fn test_move_forward_ignores_pitch() {
        let mut rig = WalkRig {
            pitch: -45.0_f32.to_radians(),
            ..Default::default()
        };
        rig.move_forward(0.2);
        assert!(rig.position.y.abs() < 1e-6, "walking stays level");
        assert!((rig.position.z + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_move_right_is_perpendicular() {
        let mut rig = WalkRig::default();
        rig.move_right(0.2);
        assert!((rig.position.x - 0.2).abs() < 1e-6);
        assert!(rig.position.z.abs() < 1e-6);
    }

    #[test]
    fn test_move_vertical_bypasses_look() {
        let mut rig = WalkRig {
            pitch: 80.0_f32.to_radians(),
            yaw: 1.0,
            ..Default::default()
        };
        rig.move_vertical(0.1);
        assert!((rig.position.y - 0.1).abs() < 1e-6);
        assert!(rig.position.x.abs() < 1e-6);
        assert!(rig.position.z.abs() < 1e-6);
    }

    #[test]
    fn test_orientation_reports_zero_roll() {
        let rig = WalkRig {
            yaw: 0.5,
            pitch: -0.25,
            ..Default::default()
        };
        let o = rig.orientation();
        assert!((o.x + 0.25).abs() < 1e-6);
        assert!((o.y - 0.5).abs() < 1e-6);
        assert_eq!(o.z, 0.0);
    }
}
