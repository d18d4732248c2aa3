//! `version` command handler

use serde_json::json;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::AppError;

/// Print the package name and version.
///
/// # Errors
///
/// Returns a JSON error if the JSON form cannot be serialized.
pub fn run(args: &VersionArgs) -> Result<(), AppError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match args.format {
        OutputFormat::Human => println!("{name} {version}"),
        OutputFormat::Json => {
            let info = json!({"name": name, "version": version});
            println!("{}", serde_json::to_string(&info)?);
        }
    }
    Ok(())
}
