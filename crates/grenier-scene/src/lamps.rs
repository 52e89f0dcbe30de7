//! The toggleable lamp pair.
//!
//! Two bulb lights share one lit/unlit state, flipped by a dedicated key.
//! Every toggle restarts the feedback cue so rapid toggling replays it from
//! the beginning instead of stacking tails. There is no debounce: held-key
//! auto-repeat toggles too.

use crate::audio::AudioCue;
use glam::Vec3;

/// One bulb light. The renderer reads `visible`; everything else is static
/// placement data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampLight {
    /// World position of the bulb.
    pub position: Vec3,
    /// Luminous intensity.
    pub intensity: f32,
    /// Whether the renderer should emit this light.
    pub visible: bool,
}

/// The pair of secondary bulb lights and their shared toggle state.
#[derive(Debug, Clone, PartialEq)]
pub struct LampPair {
    lit: bool,
    /// The two bulbs. Visibility always matches `lit`.
    pub lights: [LampLight; 2],
}

impl Default for LampPair {
    fn default() -> Self {
        // Bulb placement from the attic scene.
        let bulb = |position| LampLight {
            position,
            intensity: 10.0,
            visible: true,
        };
        Self {
            lit: true,
            lights: [
                bulb(Vec3::new(-9.25, 2.25, 0.0)),
                bulb(Vec3::new(1.0, 2.25, 0.0)),
            ],
        }
    }
}

impl LampPair {
    /// Whether the bulbs are currently on.
    #[must_use]
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Flip the pair, propagate visibility to both bulbs, and restart the
    /// feedback cue. Returns the new state.
    pub fn toggle(&mut self, cue: &mut impl AudioCue) -> bool {
        self.lit = !self.lit;
        for light in &mut self.lights {
            light.visible = self.lit;
        }
        cue.reset();
        cue.play();
        self.lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records cue calls in order.
    #[derive(Default)]
    struct CueSpy {
        calls: Vec<&'static str>,
    }

    impl AudioCue for CueSpy {
        fn reset(&mut self) {
            self.calls.push("reset");
        }
        fn play(&mut self) {
            self.calls.push("play");
        }
    }

    #[test]
    fn test_default_is_lit_with_visible_bulbs() {
        let lamps = LampPair::default();
        assert!(lamps.is_lit());
        assert!(lamps.lights.iter().all(|l| l.visible));
    }

    #[test]
    fn test_toggle_flips_state_and_visibility() {
        let mut lamps = LampPair::default();
        let mut cue = CueSpy::default();
        let lit = lamps.toggle(&mut cue);
        assert!(!lit);
        assert!(lamps.lights.iter().all(|l| !l.visible));
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let mut lamps = LampPair::default();
        let mut cue = CueSpy::default();
        lamps.toggle(&mut cue);
        assert!(lamps.lights.iter().all(|l| !l.visible));
        lamps.toggle(&mut cue);
        assert!(lamps.is_lit());
        assert!(lamps.lights.iter().all(|l| l.visible));
    }

    #[test]
    fn test_every_toggle_restarts_the_cue() {
        let mut lamps = LampPair::default();
        let mut cue = CueSpy::default();
        lamps.toggle(&mut cue);
        lamps.toggle(&mut cue);
        lamps.toggle(&mut cue);
        // Reset always precedes play, once per toggle.
        assert_eq!(
            cue.calls,
            vec!["reset", "play", "reset", "play", "reset", "play"]
        );
    }

    #[test]
    fn test_bulb_placement_is_preserved_across_toggles() {
        let mut lamps = LampPair::default();
        let positions: Vec<Vec3> = lamps.lights.iter().map(|l| l.position).collect();
        let mut cue = CueSpy::default();
        lamps.toggle(&mut cue);
        for (light, original) in lamps.lights.iter().zip(&positions) {
            assert_eq!(light.position, *original);
        }
    }
}
