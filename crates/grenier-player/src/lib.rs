//! The walk rig (first-person viewpoint) and per-tick movement application.

pub mod movement;
pub mod rig;

pub use movement::{MovementConfig, apply_movement};
pub use rig::WalkRig;
