//! Set with O(1) insert, remove, and uniform random sampling.
//!
//! Pairs a dense value array with an index map: insertion appends, removal
//! swaps the victim with the last element and pops, and sampling picks a
//! random dense index. Randomness comes from an internal XorShift64 state
//! (fast and doesn't require system time), so the structure stays
//! self-contained and deterministic per seed.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<T, usize>        values: Vec<T>  (dense)
//!   ┌─────────┬─────────┐            ┌─────┬─────┬─────┐
//!   │    A    │    0    │            │  A  │  B  │  C  │
//!   │    B    │    1    │            └─────┴─────┴─────┘
//!   │    C    │    2    │
//!   └─────────┴─────────┘
//!
//!   remove(A): swap A with C → [C, B, A], update C's index to 0,
//!              pop → [C, B], drop A from the index
//! ```
//!
//! ## Performance
//! - `insert` / `remove` / `contains`: O(1) average
//! - `get_random`: O(1)
//!
//! `check_invariants()` is available in debug/test builds.

use rustc_hash::FxHashMap;
use std::hash::Hash;

#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;

/// Set supporting constant-time membership changes and uniform random
/// sampling of a member.
///
/// Sampling an empty set is an ordinary `None`, not an error.
/// [`get_random`](RandomizedSet::get_random) takes `&mut self` because it
/// advances the internal PRNG state.
///
/// # Example
///
/// ```
/// use structkit::set::RandomizedSet;
///
/// let mut set = RandomizedSet::new();
/// assert!(set.insert(1));
/// assert!(!set.insert(1)); // already present
/// assert_eq!(set.get_random(), Some(&1));
/// assert!(set.remove(&1));
/// assert_eq!(set.get_random(), None);
/// ```
#[derive(Debug)]
pub struct RandomizedSet<T> {
    index: FxHashMap<T, usize>,
    values: Vec<T>,
    rng_state: u64,
}

impl<T> RandomizedSet<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            values: Vec::new(),
            // Non-zero seed; XorShift64 must never hold state 0.
            rng_state: 0x9e3779b97f4a7c15,
        }
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if `value` is a member.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Adds `value` to the set.
    ///
    /// Returns `true` if it was not present, `false` otherwise.
    pub fn insert(&mut self, value: T) -> bool {
        if self.index.contains_key(&value) {
            return false;
        }
        self.index.insert(value.clone(), self.values.len());
        self.values.push(value);
        true
    }

    /// Removes `value` from the set by swapping it with the last dense slot
    /// and popping.
    ///
    /// Returns `true` if it was present, `false` otherwise.
    pub fn remove(&mut self, value: &T) -> bool {
        let idx = match self.index.remove(value) {
            Some(idx) => idx,
            None => return false,
        };
        let last = self.values.len() - 1;
        if idx != last {
            self.values.swap(idx, last);
            // The displaced member now lives at the victim's old slot.
            if let Some(slot) = self.index.get_mut(&self.values[idx]) {
                *slot = idx;
            }
        }
        self.values.pop();
        true
    }

    /// Returns a uniformly random member, or `None` if the set is empty.
    pub fn get_random(&mut self) -> Option<&T> {
        if self.values.is_empty() {
            return None;
        }
        // XorShift64 PRNG (fast and doesn't require system time)
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng_state = x;
        self.values.get((x as usize) % self.values.len())
    }

    /// Removes all members. PRNG state is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.values.clear();
    }

    /// Verifies that the index and the dense array agree exactly.
    /// Test/debug builds only.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.values.len() {
            return Err(InvariantError::new(format!(
                "index holds {} members but dense array holds {}",
                self.index.len(),
                self.values.len()
            )));
        }
        for (idx, value) in self.values.iter().enumerate() {
            match self.index.get(value) {
                Some(&indexed) if indexed == idx => {}
                Some(_) => {
                    return Err(InvariantError::new(
                        "index points at a different slot for a dense member",
                    ));
                }
                None => return Err(InvariantError::new("dense member missing from index")),
            }
        }
        Ok(())
    }
}

impl<T> Default for RandomizedSet<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
