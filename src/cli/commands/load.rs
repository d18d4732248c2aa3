//! `load` command handler
//!
//! Loads each requested configuration `--repeat` times through a single
//! caching loader, then prints the configurations and cache statistics.
//! Passes after the first are answered from the cache, which shows up as
//! hits in the statistics and as the absence of file-load log lines.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::cli::args::{LoadArgs, OutputFormat};
use crate::config::cache::CacheInfo;
use crate::config::loader::ConfigLoader;
use crate::config::schema::ConfigObject;
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct LoadReport<'a> {
    configs: IndexMap<&'a str, &'a ConfigObject>,
    cache: CacheInfo,
}

/// Load the named configurations.
///
/// # Errors
///
/// Returns the first [`ConfigError`](crate::error::ConfigError) raised by
/// the loader, or a JSON error if the report cannot be serialized.
pub fn run(args: &LoadArgs) -> Result<(), AppError> {
    tracing::debug!(
        config_dir = %args.config_dir.display(),
        capacity = args.capacity,
        "creating configuration loader"
    );
    let mut loader = ConfigLoader::with_capacity(&args.config_dir, args.capacity);

    let mut configs: IndexMap<&str, Arc<ConfigObject>> = IndexMap::new();
    for pass in 1..=args.repeat {
        for name in &args.names {
            let config = loader.load(name)?;
            tracing::info!(name = %name, pass, "configuration ready");
            configs.entry(name.as_str()).or_insert(config);
        }
    }

    let cache = loader.cache_info();

    match args.format {
        OutputFormat::Human => {
            for (name, config) in &configs {
                println!("{name}: {}", serde_json::to_string(config.as_ref())?);
            }
            println!(
                "cache: {} hit(s), {} miss(es), {}/{} entries",
                cache.hits, cache.misses, cache.len, cache.capacity
            );
        }
        OutputFormat::Json => {
            let report = LoadReport {
                configs: configs
                    .iter()
                    .map(|(name, config)| (*name, config.as_ref()))
                    .collect(),
                cache,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
