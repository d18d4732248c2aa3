//! Configuration loader
//!
//! Loading a configuration by name runs a fixed pipeline:
//! 1. Cache lookup (a hit returns immediately, without I/O or validation)
//! 2. Path resolution: `{config_dir}/{name}.json`
//! 3. Whole-file read and JSON parsing
//! 4. Schema validation
//! 5. Cache insert, evicting the least recently used entry when full
//!
//! Cached configurations are never re-read. If a file changes on disk after
//! its first successful load, later loads keep returning the original value
//! until the entry is evicted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::config::cache::{CacheInfo, LruCache};
use crate::config::schema::{ConfigObject, Schema};
use crate::config::validation::SchemaValidator;
use crate::error::ConfigError;

/// Number of configurations a loader keeps by default.
pub const DEFAULT_CACHE_CAPACITY: usize = 5;

/// Directory used when none is given.
pub const DEFAULT_CONFIG_DIR: &str = "configs";

// ============================================================================
// Sources
// ============================================================================

/// Where configuration files are read from.
///
/// The loader only touches storage through this trait, which is what lets
/// tests observe whether a load went to disk.
pub trait ConfigSource {
    /// Returns `true` if a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the whole file at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while opening or reading the file.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads configuration files from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ConfigSource for FsSource {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Reads and parses one JSON file through `source`.
///
/// A leading UTF-8 byte order mark is ignored.
///
/// # Errors
///
/// Returns [`ConfigError::FileNotFound`] if nothing exists at `path`,
/// [`ConfigError::Io`] if it cannot be read, or [`ConfigError::Parse`] if
/// the content is not valid JSON.
pub fn read_json<S: ConfigSource + ?Sized>(source: &S, path: &Path) -> Result<Value, ConfigError> {
    if !source.exists(path) {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = source
        .read_to_string(path)
        .map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let value = serde_json::from_str(content)
        .map_err(|e| ConfigError::parse(path.to_path_buf(), &e))?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(value)
}

// ============================================================================
// Options
// ============================================================================

/// Options for the configuration loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Directory holding `{name}.json` files.
    pub config_dir: PathBuf,

    /// Maximum number of cached configurations. Zero disables caching.
    pub capacity: usize,

    /// Schema every loaded configuration must satisfy.
    pub schema: Schema,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            capacity: DEFAULT_CACHE_CAPACITY,
            schema: Schema::app_default(),
        }
    }
}

// ============================================================================
// Loader
// ============================================================================

/// Loads named JSON configurations, validates them, and caches the result.
///
/// The loader is single-threaded: [`ConfigLoader::load`] takes `&mut self`.
/// To share one across threads, put it behind a mutex so that lookup,
/// insert, and eviction happen as one step.
#[derive(Debug)]
pub struct ConfigLoader<S = FsSource> {
    config_dir: PathBuf,
    schema: Schema,
    cache: LruCache<Arc<ConfigObject>>,
    source: S,
}

impl ConfigLoader<FsSource> {
    /// Creates a loader for `config_dir` with the default schema and a
    /// cache of [`DEFAULT_CACHE_CAPACITY`] entries.
    #[must_use]
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self::with_capacity(config_dir, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a loader for `config_dir` caching at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(config_dir: impl Into<PathBuf>, capacity: usize) -> Self {
        Self::with_options(LoaderOptions {
            config_dir: config_dir.into(),
            capacity,
            ..LoaderOptions::default()
        })
    }

    /// Creates a file-system loader from explicit options.
    #[must_use]
    pub fn with_options(options: LoaderOptions) -> Self {
        Self::with_source(options, FsSource)
    }
}

impl<S: ConfigSource> ConfigLoader<S> {
    /// Creates a loader that reads through `source`.
    #[must_use]
    pub fn with_source(options: LoaderOptions, source: S) -> Self {
        Self {
            config_dir: options.config_dir,
            schema: options.schema,
            cache: LruCache::new(options.capacity),
            source,
        }
    }

    /// Loads, validates, and caches the configuration called `name`.
    ///
    /// Repeated calls for a cached name return the same `Arc` without
    /// touching the source or re-running validation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` is empty
    /// - The resolved file does not exist or cannot be read
    /// - The file is not valid JSON
    /// - The parsed value does not satisfy the schema
    ///
    /// Nothing is cached when an error is returned.
    pub fn load(&mut self, name: &str) -> Result<Arc<ConfigObject>, ConfigError> {
        if let Some(cached) = self.cache.get(name) {
            return Ok(Arc::clone(cached));
        }

        let raw = self.read_raw(name)?;
        let config = Arc::new(SchemaValidator::validate(&self.schema, raw)?);

        if let Some((evicted, _)) = self.cache.insert(name.to_string(), Arc::clone(&config)) {
            tracing::debug!(name, evicted = %evicted, "evicted least recently used configuration");
        }
        Ok(config)
    }

    /// Resolves, reads, and parses a configuration file without validating
    /// or caching it.
    ///
    /// # Errors
    ///
    /// Returns the same resolution, I/O, and parse errors as
    /// [`ConfigLoader::load`].
    pub fn read_raw(&self, name: &str) -> Result<Value, ConfigError> {
        let path = self.path_for(name)?;
        read_json(&self.source, &path)
    }

    /// Resolves the file path for a configuration name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidName`] if `name` is empty. Any other
    /// name is used verbatim, so `prod/app` resolves to
    /// `{config_dir}/prod/app.json`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, ConfigError> {
        if name.is_empty() {
            return Err(ConfigError::InvalidName {
                name: name.to_string(),
                reason: "name is empty",
            });
        }
        Ok(self.config_dir.join(format!("{name}.json")))
    }

    /// Returns `true` if `name` is currently cached.
    ///
    /// Does not count as a use for eviction purposes.
    #[must_use]
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains(name)
    }

    /// Cache occupancy and hit statistics.
    #[must_use]
    pub fn cache_info(&self) -> CacheInfo {
        self.cache.info()
    }

    /// Base directory configuration names are resolved against.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Schema applied to every loaded configuration.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}
