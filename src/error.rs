//! Error types for `confcache`
//!
//! Every failure raised by the loading pipeline is a [`ConfigError`], so
//! callers can match the whole family or a single kind. Schema violations
//! are grouped under [`SchemaError`] because the validator is usable on its
//! own, without a loader.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::schema::ValueType;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `confcache` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (missing file, invalid JSON, schema violation)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (permission denied, unreadable file)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (unparsable arguments, invalid configuration name)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for the `confcache` binary.
///
/// Aggregates library errors with the I/O and serialization failures that
/// only the command handlers can hit.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more files failed validation
    #[error("{count} file(s) failed validation")]
    ValidationFailed {
        /// Number of files that failed validation
        count: usize,
    },
}

impl AppError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::Io { .. }) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Config(ConfigError::InvalidName { .. }) => ExitCode::USAGE_ERROR,
            Self::Config(_) | Self::ValidationFailed { .. } => ExitCode::CONFIG_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
///
/// Raised at the point of detection and never retried: a missing file or
/// malformed JSON does not fix itself between attempts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The parsed configuration does not satisfy the schema
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Resolved configuration file does not exist
    #[error("configuration file not found: {}", path.display())]
    FileNotFound {
        /// Path that was resolved from the configuration name
        path: PathBuf,
    },

    /// File content is not valid JSON
    #[error("parse error in {}: {message}", path.display())]
    Parse {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the parser gave up
        line: usize,
        /// Column number where the parser gave up
        column: usize,
        /// Error message from the parser
        message: String,
    },

    /// File exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Configuration name cannot be turned into a file name
    #[error("invalid configuration name '{name}': {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },
}

impl ConfigError {
    /// Builds a [`ConfigError::Parse`] from a `serde_json` failure.
    pub(crate) fn parse(path: PathBuf, err: &serde_json::Error) -> Self {
        Self::Parse {
            path,
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Schema Errors
// ============================================================================

/// Schema validation errors.
///
/// Only the first violation found in schema order is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Required key absent from the configuration object
    #[error("missing key in configuration: {key}")]
    MissingKey {
        /// Name of the missing key
        key: String,
    },

    /// Key present with a value of the wrong type
    #[error("incorrect type for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Name of the offending key
        key: String,
        /// Type the schema requires
        expected: ValueType,
        /// JSON type that was found
        actual: &'static str,
    },

    /// Top-level JSON value is not an object
    #[error("configuration must be a JSON object, got {actual}")]
    NotAnObject {
        /// JSON type that was found
        actual: &'static str,
    },

    /// Schema declares no fields
    #[error("schema must declare at least one field")]
    EmptySchema,
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `confcache` binary operations.
pub type Result<T> = std::result::Result<T, AppError>;

// ============================================================================
// Tests
// ============================================================================
