//! Scene-side domain state: the interactable object and its registry,
//! proximity-gated click interaction, the toggleable lamp pair, and the
//! audio-cue seam.

pub mod audio;
pub mod interact;
pub mod interactable;
pub mod lamps;

pub use audio::{AudioCue, SilentCue};
pub use interact::{ClickOutcome, PROXIMITY_RANGE, ROTATION_STEP, handle_click};
pub use interactable::{Interactable, InteractableRegistry, RESTING_EPSILON, SceneEvent};
pub use lamps::{LampLight, LampPair};
