//! Frame-coherent mouse-look tracker.
//!
//! [`MouseLook`] accumulates raw mouse deltas between frames for camera look.
//! Deltas only accumulate while the cursor is captured; uncaptured motion is
//! the OS cursor travelling over the window and must not turn the camera.

use glam::Vec2;

/// Accumulated look input for the current frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseLook {
    delta: Vec2,
    captured: bool,
}

impl MouseLook {
    /// Creates a tracker with no accumulated motion, uncaptured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a raw device motion delta (pixels).
    pub fn on_raw_motion(&mut self, dx: f64, dy: f64) {
        if self.captured {
            self.delta += Vec2::new(dx as f32, dy as f32);
        }
    }

    /// Set the capture flag. The window shell owns the actual cursor grab.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
    }

    /// Whether look input is currently being accumulated.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Motion accumulated since the last [`clear_frame`](Self::clear_frame).
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Reset the per-frame accumulator. Call once per tick after applying
    /// the delta.
    pub fn clear_frame(&mut self) {
        self.delta = Vec2::ZERO;
    }
}
