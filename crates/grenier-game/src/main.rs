//! Grenier — first-person attic walkthrough.
//!
//! Opens a window, walks a first-person rig through the attic with WASD and
//! mouse look, turns the nearby prop on click, and toggles the bulb pair
//! with C. Status text is presented through the title bar.
//!
//! Run with: `cargo run -p grenier-game`

mod controller;
mod scene;

use clap::Parser;
use controller::WalkerController;
use grenier_app::{FrameClock, FrameHooks};
use grenier_config::{CliArgs, Config};
use grenier_hud::{Region, StatusSurface};
use grenier_input::RawKeyEvent;
use grenier_scene::SilentCue;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

/// Everything the shell drives, bundled behind the frame hooks.
struct WalkerGame {
    controller: WalkerController<SilentCue>,
    surface: StatusSurface,
    clock: FrameClock,
    show_fps: bool,
}

impl FrameHooks for WalkerGame {
    fn on_key(&mut self, event: RawKeyEvent) {
        self.controller.on_key(event);
    }

    fn on_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.controller.on_mouse_motion(dx, dy);
    }

    fn on_click(&mut self) {
        self.controller.on_click();
    }

    fn on_capture_changed(&mut self, captured: bool) {
        self.controller.set_look_captured(captured);
    }

    fn tick(&mut self) -> String {
        self.clock.tick();
        self.controller.tick();
        self.controller.refresh_status(&mut self.surface);

        let mut title = self.surface.compose();
        if self.show_fps {
            title = format!("{title} | FPS: {:.0}", self.clock.fps());
        }
        title
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(grenier_config::default_config_dir);
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            // Logging is not up yet; degraded defaults beat not starting.
            eprintln!("config error ({err}), falling back to defaults");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    grenier_log::init_logging(
        Some(Path::new("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    info!("Grenier — attic walkthrough");
    info!(
        "window: {}x{} | title: {}",
        config.window.width, config.window.height, config.window.title
    );
    info!(
        "walk speed: {} | vertical speed: {}",
        config.movement.walk_speed, config.movement.vertical_speed
    );

    // The four status regions must exist before the frame loop starts.
    let surface = match StatusSurface::new(&Region::ALL) {
        Ok(surface) => surface,
        Err(err) => {
            error!("display misconfigured: {err}");
            return ExitCode::FAILURE;
        }
    };

    let cue = SilentCue::new(config.audio.master_volume * config.audio.sfx_volume);
    let mut controller = WalkerController::new(&config, cue);
    controller.apply_scene_event(scene::load_prop(Path::new(&config.scene.model_dir)));

    let game = WalkerGame {
        controller,
        surface,
        clock: FrameClock::new(),
        show_fps: config.debug.show_fps,
    };

    if let Err(err) = grenier_app::run(&config.window, game) {
        error!("shell failed: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
