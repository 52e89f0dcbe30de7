//! Configuration structs with sensible defaults and RON persistence.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

/// Top-level walker configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowSettings,
    /// Movement tuning.
    pub movement: MovementSettings,
    /// Input settings.
    pub input: InputSettings,
    /// Scene/asset settings.
    pub scene: SceneSettings,
    /// Audio settings.
    pub audio: AudioSettings,
    /// Debug/development settings.
    pub debug: DebugSettings,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Window title.
    pub title: String,
}

/// Movement tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovementSettings {
    /// Horizontal speed per tick (forward/backward/strafe).
    pub walk_speed: f32,
    /// Vertical speed per tick. Tuned lower than horizontal.
    pub vertical_speed: f32,
    /// Mouse sensitivity multiplier for camera look.
    pub mouse_sensitivity: f32,
}

/// Input settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputSettings {
    /// Keybinding overrides (action name -> key name, e.g.
    /// `"toggle_lamps": "KeyL"`). Unknown names are logged and skipped.
    pub bindings: HashMap<String, String>,
}

/// Scene/asset settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneSettings {
    /// Directory the prop models are loaded from.
    pub model_dir: String,
}

/// Audio settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0).
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0).
    pub sfx_volume: f32,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugSettings {
    /// Append an FPS readout to the status line.
    pub show_fps: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fullscreen: false,
            title: "Grenier".to_string(),
        }
    }
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            walk_speed: 0.2,
            vertical_speed: 0.1,
            mouse_sensitivity: 0.003,
        }
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            model_dir: "models".to_string(),
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
        }
    }
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            show_fps: false,
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            info!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            info!("created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;

        if &new_config != self {
            info!("config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 1280"));
        assert!(ron_str.contains("walk_speed: 0.2"));
        assert!(ron_str.contains("model_dir: \"models\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        // Config missing the `movement` section entirely.
        let ron_str = "(window: (), input: (), audio: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.movement, MovementSettings::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_vertical_speed_defaults_below_walk_speed() {
        let movement = MovementSettings::default();
        assert!(movement.vertical_speed < movement.walk_speed);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 1920;
        config.movement.walk_speed = 0.35;
        config
            .input
            .bindings
            .insert("toggle_lamps".to_string(), "KeyL".to_string());

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.debug.show_fps = true;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert!(result.unwrap().debug.show_fps);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
