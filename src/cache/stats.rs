//! Cache statistics tracking.
//!
//! Counters replace the inline debug printing a cache like this often
//! accretes: every state transition is observable after the fact without
//! any I/O in the hot path.

use std::fmt;

/// Statistics tracked by the cache.
///
/// Plain counters, not atomics: the cache takes `&mut self` for every
/// mutating operation, so the owner already serializes access.
///
/// # Example
/// ```
/// use swapcache::{Cache, EvictionPolicy};
///
/// let mut cache = Cache::new(EvictionPolicy::Lru, 2).unwrap();
/// cache.put(1, "a");
/// cache.get(&1);
/// cache.get(&9);
/// assert_eq!(cache.stats().hits, 1);
/// assert_eq!(cache.stats().misses, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of get calls that found the key resident.
    pub hits: u64,

    /// Number of get calls on an absent key.
    pub misses: u64,

    /// Number of entries removed by overflow eviction.
    pub evictions: u64,

    /// Number of put calls that created a new entry.
    pub insertions: u64,

    /// Number of put calls that overwrote an existing entry.
    pub updates: u64,
}

impl CacheStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of get calls (hits + misses).
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Calculate cache hit rate (0.0 to 1.0). Returns 0.0 with no lookups.
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
