//! `validate` command handler
//!
//! Checks configuration files against the application schema without a
//! cache. Every file is checked; the command fails if any of them did.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::loader::{FsSource, read_json};
use crate::config::schema::Schema;
use crate::config::validation::SchemaValidator;
use crate::error::{AppError, ConfigError};

#[derive(Debug, Serialize)]
struct FileOutcome {
    file: PathBuf,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ValidateReport<'a> {
    schema: &'a Schema,
    files: Vec<FileOutcome>,
}

/// Validate configuration files.
///
/// # Errors
///
/// Returns [`AppError::ValidationFailed`] if any file is missing, malformed,
/// or violates the schema.
pub fn run(args: &ValidateArgs) -> Result<(), AppError> {
    let schema = Schema::app_default();

    let files: Vec<FileOutcome> = args
        .files
        .iter()
        .map(|path| {
            tracing::info!(file = %path.display(), "validating configuration");
            let error = validate_file(&schema, path).err().map(|e| e.to_string());
            FileOutcome {
                file: path.clone(),
                valid: error.is_none(),
                error,
            }
        })
        .collect();
    let failed = files.iter().filter(|f| !f.valid).count();

    match args.format {
        OutputFormat::Human => {
            for outcome in &files {
                match &outcome.error {
                    None => println!("{}: ok", outcome.file.display()),
                    Some(error) => println!("{}: {error}", outcome.file.display()),
                }
            }
        }
        OutputFormat::Json => {
            let report = ValidateReport {
                schema: &schema,
                files,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if failed > 0 {
        return Err(AppError::ValidationFailed { count: failed });
    }
    Ok(())
}

fn validate_file(schema: &Schema, path: &std::path::Path) -> Result<(), ConfigError> {
    let value = read_json(&FsSource, path)?;
    SchemaValidator::validate(schema, value)?;
    Ok(())
}
