//! Audio-cue seam.
//!
//! The feedback sound is a preloaded external resource with two operations:
//! rewind to the start, and play. Playback is fire-and-forget; restarting
//! before every play is how overlapping triggers are avoided. The shell
//! supplies the backend; [`SilentCue`] stands in when there is none.

use tracing::{debug, trace};

/// A single preloaded feedback sound.
pub trait AudioCue {
    /// Rewind the cue to its start.
    fn reset(&mut self);
    /// Start playback from the current position.
    fn play(&mut self);
}

/// Backend-less cue: logs instead of playing.
#[derive(Debug, Clone, Copy)]
pub struct SilentCue {
    volume: f32,
}

impl SilentCue {
    /// Create a cue that would play at the given volume (0.0 to 1.0).
    #[must_use]
    pub fn new(volume: f32) -> Self {
        Self { volume }
    }
}

impl AudioCue for SilentCue {
    fn reset(&mut self) {
        trace!("lamp cue rewound");
    }

    fn play(&mut self) {
        debug!(
            "lamp cue played at {:.0}% (no audio backend)",
            self.volume * 100.0
        );
    }
}
