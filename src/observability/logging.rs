//! Logging initialization for `confcache`.
//!
//! The library only emits `tracing` events. The binary installs one global
//! subscriber at startup, writing human-readable or JSON lines to stderr.
//! `CONFCACHE_LOG_LEVEL` overrides the level chosen from the flags.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable that overrides the level chosen from the flags.
pub const LOG_LEVEL_ENV: &str = "CONFCACHE_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Picks the level directive for the `-q` / `-v` flags.
///
/// File loads and validations are logged at info, so that is the default.
/// `-q` keeps only errors; each `-v` goes one level deeper:
/// - quiet → `"error"`
/// - 0 → `"info"`
/// - 1 → `"debug"` (evictions, loader setup)
/// - 2+ → `"trace"`
#[must_use]
pub const fn level_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global tracing subscriber.
///
/// Uses `try_init()`, so a second call (e.g. from tests) is a no-op.
pub fn init_logging(format: LogFormat, verbosity: u8, quiet: bool, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbosity, quiet)));

    let show_target = verbosity >= 1;

    let use_ansi = match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(show_target)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Human => builder.with_ansi(use_ansi).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
