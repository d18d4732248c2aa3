//! Shared integration-test helpers: fixture paths, temporary config
//! directories, and a source that counts file reads.

#![allow(dead_code)]

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use confcache::config::{ConfigSource, FsSource};

/// Returns the path to a test fixture.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Directory holding the JSON fixtures.
#[must_use]
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Writes `{dir}/{name}.json`.
#[allow(clippy::missing_panics_doc)]
pub fn write_config(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(format!("{name}.json")), content).expect("failed to write config");
}

/// A valid application config with a distinguishing host.
#[must_use]
pub fn app_config(host: &str, port: u16) -> String {
    format!(r#"{{"host": "{host}", "port": {port}, "debug": false}}"#)
}

/// Runs the built binary to completion with logging pinned to info.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_confcache"))
        .args(args)
        .args(["--color", "never"])
        .env_remove("CONFCACHE_LOG_LEVEL")
        .env_remove("CONFCACHE_CONFIG_DIR")
        .env_remove("CONFCACHE_LOG_FORMAT")
        .output()
        .expect("failed to run confcache")
}

/// File-system source that counts how often the loader reads a file.
#[derive(Debug, Default)]
pub struct CountingSource {
    reads: Cell<usize>,
}

impl CountingSource {
    /// Number of file reads so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl ConfigSource for CountingSource {
    fn exists(&self, path: &Path) -> bool {
        FsSource.exists(path)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.reads.set(self.reads.get() + 1);
        FsSource.read_to_string(path)
    }
}
