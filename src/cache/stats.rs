//! Cache Statistics Module
//!
//! Tracks lookup outcomes, generator invocations and purged entries.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of lookups answered from the store
    pub hits: u64,
    /// Number of lookups that found nothing fresh
    pub misses: u64,
    /// Number of generator invocations on a miss
    pub generations: u64,
    /// Number of expired entries physically removed
    pub purged: u64,
    /// Current number of live entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Records a lookup that found a fresh value.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Records a lookup that found nothing fresh.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Generation ==
    /// Records a generator invocation on a miss.
    pub fn record_generation(&mut self) {
        self.generations += 1;
    }

    // == Record Purged ==
    /// Adds `count` physically removed expired entries.
    pub fn record_purged(&mut self, count: usize) {
        self.purged += count as u64;
    }

    // == Update Entry Count ==
    /// Sets the number of live entries at snapshot time.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
