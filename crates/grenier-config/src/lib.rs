//! Configuration for the walker.
//!
//! Runtime-tunable settings persisted to disk as RON, with CLI overrides via
//! clap and hot-reload detection. Unknown fields are ignored and missing
//! sections take defaults, so config files stay forward and backward
//! compatible.

mod cli;
mod config;
mod error;

use std::path::PathBuf;

pub use cli::CliArgs;
pub use config::{
    AudioSettings, Config, DebugSettings, InputSettings, MovementSettings, SceneSettings,
    WindowSettings,
};
pub use error::ConfigError;

/// The platform config directory for this application
/// (e.g. `~/.config/grenier` on Linux), falling back to the working
/// directory when the platform offers none.
#[must_use]
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("grenier")
}
