//! Frame clock: one logical tick per presented frame.
//!
//! The walker's movement magnitudes are per-frame constants, so the loop
//! needs no fixed-timestep accumulator; the clock only measures frame time
//! for the FPS readout, smoothed with an exponential moving average.

use std::time::Instant;

/// Per-frame timing state.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Instant,
    frame_count: u64,
    frame_time_ema: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Creates a clock starting from the current instant, seeded at 60 Hz.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frame_count: 0,
            frame_time_ema: 1.0 / 60.0,
        }
    }

    /// Mark a frame boundary. Returns the wall-clock frame time in seconds.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.advance(dt);
        dt
    }

    /// Advance counters with an explicit frame time (test seam).
    fn advance(&mut self, dt: f64) {
        self.frame_count += 1;
        if dt > 0.0 {
            // EMA with alpha = 0.1 keeps the readout steady.
            self.frame_time_ema = self.frame_time_ema * 0.9 + dt * 0.1;
        }
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f64 {
        1.0 / self.frame_time_ema
    }

    /// Total frames ticked so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
