//! Configuration module
//!
//! Loads named JSON configurations from a directory, validates them against
//! a flat schema, and keeps the results in a bounded LRU cache.

pub mod cache;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cache::{CacheInfo, LruCache};
pub use loader::{
    ConfigLoader, ConfigSource, DEFAULT_CACHE_CAPACITY, DEFAULT_CONFIG_DIR, FsSource,
    LoaderOptions, read_json,
};
pub use schema::{ConfigObject, Schema, ValueType};
pub use validation::SchemaValidator;
