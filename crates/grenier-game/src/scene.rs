//! Scene bootstrap: prop placement and the load outcome.
//!
//! The prop model ships with its placement baked in; all the loader can get
//! wrong is a missing or unreadable file. That failure disables interaction
//! for the whole session and is never retried.

use glam::Vec3;
use grenier_scene::{Interactable, SceneEvent};
use std::path::Path;

/// File name of the clickable prop's model.
pub const PROP_MODEL: &str = "attic_prop.glb";

/// Where the prop stands, at the far end of the attic the player faces on
/// spawn.
const PROP_POSITION: Vec3 = Vec3::new(-5.0, 1.0, 0.0);

/// Resolve the prop's load outcome from the model directory.
pub fn load_prop(model_dir: &Path) -> SceneEvent {
    let path = model_dir.join(PROP_MODEL);
    if path.is_file() {
        SceneEvent::InteractableReady(Interactable::new(PROP_POSITION, 0.0))
    } else {
        SceneEvent::LoadFailed(format!("model not found: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        match load_prop(dir.path()) {
            SceneEvent::LoadFailed(reason) => assert!(reason.contains(PROP_MODEL)),
            other => panic!("expected LoadFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_present_model_yields_prop() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROP_MODEL), b"glTF").unwrap();
        match load_prop(dir.path()) {
            SceneEvent::InteractableReady(prop) => {
                assert_eq!(prop.position, PROP_POSITION);
                assert_eq!(prop.baseline(), 0.0);
            }
            other => panic!("expected InteractableReady, got {other:?}"),
        }
    }
}
