//! `confcache` - schema-validated JSON configuration loading
//!
//! This library loads named configuration files from a directory, checks
//! them against a flat schema, and caches validated results so repeated
//! loads skip disk I/O. It never installs a logger itself; the hosting
//! application calls [`observability::init_logging`] once at startup.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;

pub use config::{ConfigLoader, ConfigObject, Schema, SchemaValidator, ValueType};
pub use error::{ConfigError, SchemaError};
