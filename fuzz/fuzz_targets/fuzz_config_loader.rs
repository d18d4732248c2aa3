#![no_main]

use std::path::Path;

use confcache::config::{ConfigLoader, ConfigSource, LoaderOptions};
use libfuzzer_sys::fuzz_target;

/// Serves the fuzz input as the content of every file.
struct BytesSource<'a>(&'a [u8]);

impl ConfigSource for BytesSource<'_> {
    fn exists(&self, _path: &Path) -> bool {
        true
    }

    fn read_to_string(&self, _path: &Path) -> std::io::Result<String> {
        String::from_utf8(self.0.to_vec())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

fuzz_target!(|data: &[u8]| {
    let mut loader = ConfigLoader::with_source(LoaderOptions::default(), BytesSource(data));

    // A successful load must be served from cache the second time
    if let Ok(first) = loader.load("fuzz") {
        let second = loader.load("fuzz").expect("cached load failed");
        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }
});
