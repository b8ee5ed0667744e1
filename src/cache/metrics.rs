//! Plain-counter metrics for [`LruCache`](crate::cache::LruCache).
//!
//! Single-threaded `u64` counters, bumped inline in the cache's hot paths
//! and read out as a `Copy` snapshot. Enabled by the `metrics` cargo feature.

/// Internal counter block owned by the cache.
#[derive(Debug, Default)]
pub(crate) struct LruMetrics {
    pub(crate) get_calls: u64,
    pub(crate) get_hits: u64,
    pub(crate) get_misses: u64,

    pub(crate) insert_calls: u64,
    pub(crate) insert_new: u64,
    pub(crate) insert_updates: u64,

    pub(crate) evicted_entries: u64,
    pub(crate) removed_entries: u64,
}

/// Point-in-time copy of the cache's counters plus its current gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruMetricsSnapshot {
    /// Total `get` calls.
    pub get_calls: u64,
    /// `get` calls that found the key.
    pub get_hits: u64,
    /// `get` calls that missed.
    pub get_misses: u64,

    /// Total `insert` calls.
    pub insert_calls: u64,
    /// Inserts that created a new entry.
    pub insert_new: u64,
    /// Inserts that updated an existing entry in place.
    pub insert_updates: u64,

    /// Entries evicted by capacity pressure.
    pub evicted_entries: u64,
    /// Entries removed explicitly (`remove` / `pop_lru`).
    pub removed_entries: u64,

    // Gauges captured at snapshot time.
    /// Current entry count.
    pub cache_len: usize,
    /// Configured capacity.
    pub capacity: usize,
}

impl LruMetrics {
    pub(crate) fn snapshot(&self, cache_len: usize, capacity: usize) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.get_calls,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_calls,
            insert_new: self.insert_new,
            insert_updates: self.insert_updates,
            evicted_entries: self.evicted_entries,
            removed_entries: self.removed_entries,
            cache_len,
            capacity,
        }
    }
}
