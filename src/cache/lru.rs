//! Fixed-capacity cache with least-recently-used eviction.
//!
//! Single-threaded LRU built from a key index and an arena-backed recency
//! list. Uses FxHashMap for fast hashing (same hasher used in rustc) and
//! relinks nodes by stable id instead of juggling raw pointers.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────┐
//!   │                      LruCache<K, V>                        │
//!   │                                                            │
//!   │   ┌──────────────────────────────────────────────────┐     │
//!   │   │  FxHashMap<K, NodeId> (index into recency list)  │     │
//!   │   └──────────────────────────┬───────────────────────┘     │
//!   │                              │                             │
//!   │                              ▼                             │
//!   │   ┌──────────────────────────────────────────────────┐     │
//!   │   │  LinkedList<Entry<K, V>> (recency order)         │     │
//!   │   │                                                  │     │
//!   │   │  front ─► [LRU] ◄──► [..] ◄──► [MRU] ◄── back    │     │
//!   │   └──────────────────────────────────────────────────┘     │
//!   └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//!
//! ```text
//!   get(k) hit      : move k's node to back, return &value
//!   insert(k, v) new: push node at back; if len > capacity,
//!                     pop the front node and drop its index entry
//!   insert(k, v) old: replace value in place, move node to back
//! ```
//!
//! At most one entry is evicted per insert: an insert adds at most one new
//! entry, so occupancy can exceed capacity by at most one before eviction.
//!
//! ## Performance
//! - `get` / `peek` / `insert` / `remove` / `pop_lru`: O(1) average
//!
//! `check_invariants()` is available in debug/test builds.

use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::mem;

use crate::ds::arena::NodeId;
use crate::ds::linked_list::LinkedList;
use crate::error::ConfigError;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;

#[cfg(feature = "metrics")]
use crate::cache::metrics::{LruMetrics, LruMetricsSnapshot};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A fixed-capacity, single-threaded LRU cache.
///
/// Misses are `None`, never errors. A hit on [`get`](LruCache::get) promotes
/// the entry to most recently used; [`peek`](LruCache::peek) does not.
///
/// # Example
///
/// ```
/// use structkit::cache::LruCache;
///
/// let mut cache = LruCache::new(2);
/// cache.insert(1, 1);
/// cache.insert(2, 2);
/// assert_eq!(cache.get(&1), Some(&1));
///
/// // Inserting a 3rd entry evicts the LRU (key 2, since 1 was just touched)
/// cache.insert(3, 3);
/// assert_eq!(cache.get(&2), None);
/// ```
#[derive(Debug)]
pub struct LruCache<K, V> {
    index: FxHashMap<K, NodeId>,
    entries: LinkedList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache that holds at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](LruCache::try_new) to
    /// validate externally supplied capacities without panicking.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a cache that holds at most `capacity` entries, rejecting
    /// `capacity == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use structkit::cache::LruCache;
    ///
    /// assert!(LruCache::<u64, u64>::try_new(16).is_ok());
    /// assert!(LruCache::<u64, u64>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            entries: LinkedList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Returns the number of entries in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the maximum capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the key exists. Does not update recency order.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Gets a reference to a value, promoting the entry to most recently
    /// used. A miss returns `None`.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.get_calls += 1;
        }
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                {
                    self.metrics.get_misses += 1;
                }
                return None;
            }
        };
        self.entries.move_to_back(id);
        #[cfg(feature = "metrics")]
        {
            self.metrics.get_hits += 1;
        }
        self.entries.get(id).map(|entry| &entry.value)
    }

    /// Gets a reference to a value without updating recency order.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = self.index.get(key)?;
        self.entries.get(*id).map(|entry| &entry.value)
    }

    /// Inserts or updates an entry, marking it most recently used.
    ///
    /// Returns the previous value when `key` was already present. Inserting
    /// a new key into a full cache evicts the single least-recently-used
    /// entry first.
    ///
    /// # Example
    ///
    /// ```
    /// use structkit::cache::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// assert_eq!(cache.insert(1, "a"), None);
    /// assert_eq!(cache.insert(1, "b"), Some("a"));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.insert_calls += 1;
        }
        if let Some(&id) = self.index.get(&key) {
            let old = self
                .entries
                .get_mut(id)
                .map(|entry| mem::replace(&mut entry.value, value));
            self.entries.move_to_back(id);
            #[cfg(feature = "metrics")]
            {
                self.metrics.insert_updates += 1;
            }
            return old;
        }

        let id = self.entries.push_back(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        #[cfg(feature = "metrics")]
        {
            self.metrics.insert_new += 1;
        }

        if self.index.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                self.index.remove(&evicted.key);
                #[cfg(feature = "metrics")]
                {
                    self.metrics.evicted_entries += 1;
                }
            }
        }
        None
    }

    /// Removes an entry by key, returning its value if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let entry = self.entries.remove(id)?;
        #[cfg(feature = "metrics")]
        {
            self.metrics.removed_entries += 1;
        }
        Some(entry.value)
    }

    /// Removes and returns the least-recently-used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.entries.pop_front()?;
        self.index.remove(&entry.key);
        #[cfg(feature = "metrics")]
        {
            self.metrics.removed_entries += 1;
        }
        Some((entry.key, entry.value))
    }

    /// Returns the least-recently-used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.entries.front().map(|entry| (&entry.key, &entry.value))
    }

    /// Removes all entries. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
    }

    /// Returns a snapshot of the cache's operation counters.
    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity)
    }

    /// Verifies that the index and the recency list agree exactly and that
    /// occupancy respects capacity. Test/debug builds only.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.entries.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but list holds {} nodes",
                self.index.len(),
                self.entries.len()
            )));
        }
        if self.index.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "occupancy {} exceeds capacity {}",
                self.index.len(),
                self.capacity
            )));
        }
        for id in self.entries.iter_ids() {
            let entry = self
                .entries
                .get(id)
                .ok_or_else(|| InvariantError::new("list id without node"))?;
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {}
                Some(_) => {
                    return Err(InvariantError::new(
                        "index points at a different node for a listed key",
                    ));
                }
                None => return Err(InvariantError::new("listed key missing from index")),
            }
        }
        self.entries.debug_validate();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_eviction_sequence() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 1);
        cache.insert(2, 2);
        assert_eq!(cache.get(&1), Some(&1));
        cache.insert(3, 3); // evicts 2
        assert_eq!(cache.get(&2), None);
        cache.insert(4, 4); // evicts 1
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&3), Some(&3));
        assert_eq!(cache.get(&4), Some(&4));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn update_promotes_and_returns_old_value() {
        let mut cache = LruCache::new(2);
        cache.insert(1, "one");
        cache.insert(2, "two");
        assert_eq!(cache.insert(1, "uno"), Some("one"));
        // 1 is now MRU, so 2 is evicted next.
        cache.insert(3, "three");
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some(&"uno"));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn get_promotes_without_changing_value() {
        let mut cache = LruCache::new(3);
        cache.insert(1, 10);
        for _ in 0..5 {
            assert_eq!(cache.get(&1), Some(&10));
        }
    }

    #[test]
    fn peek_does_not_promote() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 1);
        cache.insert(2, 2);
        assert_eq!(cache.peek(&1), Some(&1));
        // 1 is still LRU despite the peek.
        cache.insert(3, 3);
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&2));
    }

    #[test]
    fn len_never_exceeds_capacity() {
        let mut cache = LruCache::new(4);
        for i in 0..100u64 {
            cache.insert(i, i);
            assert!(cache.len() <= 4);
            cache.check_invariants().unwrap();
        }
        // Exactly the 4 newest keys survive.
        for i in 96..100 {
            assert!(cache.contains(&i));
        }
    }

    #[test]
    fn capacity_one_keeps_only_newest() {
        let mut cache = LruCache::new(1);
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = LruCache::<u64, u64>::try_new(0).unwrap_err();
        assert!(err.message().contains("capacity"));
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn new_panics_on_zero_capacity() {
        let _ = LruCache::<u64, u64>::new(0);
    }

    #[test]
    fn remove_and_pop_lru() {
        let mut cache = LruCache::new(3);
        cache.insert(1, "a");
        cache.insert(2, "b");
        cache.insert(3, "c");

        assert_eq!(cache.remove(&2), Some("b"));
        assert_eq!(cache.remove(&2), None);
        assert_eq!(cache.peek_lru(), Some((&1, &"a")));
        assert_eq!(cache.pop_lru(), Some((1, "a")));
        assert_eq!(cache.pop_lru(), Some((3, "c")));
        assert_eq!(cache.pop_lru(), None);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn clear_resets_entries_but_not_capacity() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 2);
        cache.insert(9, 9);
        assert_eq!(cache.get(&9), Some(&9));
        cache.check_invariants().unwrap();
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_track_hits_misses_and_evictions() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.insert(1, 10); // update
        cache.insert(3, 3); // evicts 2
        assert_eq!(cache.get(&1), Some(&10)); // hit
        assert_eq!(cache.get(&2), None); // miss

        let snap = cache.metrics_snapshot();
        assert_eq!(snap.get_calls, 2);
        assert_eq!(snap.get_hits, 1);
        assert_eq!(snap.get_misses, 1);
        assert_eq!(snap.insert_calls, 4);
        assert_eq!(snap.insert_new, 3);
        assert_eq!(snap.insert_updates, 1);
        assert_eq!(snap.evicted_entries, 1);
        assert_eq!(snap.cache_len, 2);
        assert_eq!(snap.capacity, 2);
    }
}
