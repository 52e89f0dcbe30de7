//! Structured logging for the walker.
//!
//! Span-based, filterable logging via the `tracing` ecosystem: console
//! output with uptime timestamps and module paths, plus JSON file logging in
//! debug builds for post-mortem analysis. The configured log level acts as
//! the default filter; `RUST_LOG` always wins.

use grenier_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// * `log_dir` - optional directory for JSON log files (debug builds only)
/// * `debug_build` - whether this is a debug build (enables file logging)
/// * `config` - optional configuration carrying a log-level override
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => "info,winit=warn".to_string(),
    };

    // Default filter, overridable via the RUST_LOG env var.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    // In debug builds, also log to a file for post-mortem analysis.
    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("grenier.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The default filter: `info` everywhere, `warn` for winit's event-loop noise.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info,winit=warn")
}
