//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod load;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::AppError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Load(args) => load::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Version(args) => version::run(&args),
    }
}
