//! CLI argument definitions
//!
//! All Clap derive structs for `confcache` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::loader::{DEFAULT_CACHE_CAPACITY, DEFAULT_CONFIG_DIR};
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Load and validate JSON configuration files.
#[derive(Parser, Debug)]
#[command(name = "confcache", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log detail (default info, -v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "CONFCACHE_COLOR")]
    pub color: ColorChoice,

    /// Log line format.
    #[arg(long, default_value = "human", global = true, env = "CONFCACHE_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load configurations by name through a caching loader.
    Load(LoadArgs),

    /// Validate configuration files against the application schema.
    Validate(ValidateArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `load`.
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Configuration names, resolved as `<config-dir>/<name>.json`.
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Directory holding configuration files.
    #[arg(long, default_value = DEFAULT_CONFIG_DIR, env = "CONFCACHE_CONFIG_DIR")]
    pub config_dir: PathBuf,

    /// Maximum number of cached configurations (0 disables caching).
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub capacity: usize,

    /// How many times to load each name; later passes are served from cache.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,

    /// Output format.
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `version`.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}
