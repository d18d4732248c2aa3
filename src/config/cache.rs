//! Bounded LRU cache keyed by configuration name.
//!
//! Recency is the insertion order of an [`IndexMap`]: the front entry is the
//! least recently used, and a hit moves its entry to the back.

use indexmap::IndexMap;
use serde::Serialize;

/// Snapshot of cache occupancy and hit statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheInfo {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to go to disk.
    pub misses: u64,
    /// Maximum number of entries.
    pub capacity: usize,
    /// Current number of entries.
    pub len: usize,
}

/// Bounded map from name to value with least-recently-used eviction.
///
/// A capacity of zero disables caching entirely.
#[derive(Debug, Clone)]
pub struct LruCache<V> {
    entries: IndexMap<String, V>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl<V> LruCache<V> {
    /// Creates an empty cache holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Looks up `key`, marking it most recently used on a hit.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let Some(index) = self.entries.get_index_of(key) else {
            self.misses += 1;
            return None;
        };
        self.hits += 1;
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        self.entries.get_index(last).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is cached, without touching recency or stats.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts `value` as the most recently used entry.
    ///
    /// Returns the entry evicted to make room, if any. Re-inserting an
    /// existing key replaces its value and evicts nothing.
    pub fn insert(&mut self, key: String, value: V) -> Option<(String, V)> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(index) = self.entries.get_index_of(&key) {
            let last = self.entries.len() - 1;
            self.entries.move_index(index, last);
            self.entries[last] = value;
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0)
        } else {
            None
        };
        self.entries.insert(key, value);
        evicted
    }

    /// Cached names, least recently used first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current occupancy and hit statistics.
    #[must_use]
    pub fn info(&self) -> CacheInfo {
        CacheInfo {
            hits: self.hits,
            misses: self.misses,
            capacity: self.capacity,
            len: self.entries.len(),
        }
    }
}
