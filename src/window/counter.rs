//! Event counter over a trailing fixed time window.
//!
//! Timestamps arrive non-decreasing and are kept in a FIFO; each ping prunes
//! from the front everything that has fallen out of the trailing
//! [`WINDOW`]-unit interval and reports what remains. Amortized O(1) per
//! ping: every timestamp is pushed and popped at most once.
//!
//! ## Behavior
//! - `ping(t)`: append `t`, drop every retained timestamp strictly below
//!   `t - WINDOW`, return the count
//! - a timestamp smaller than its predecessor is rejected loudly rather
//!   than silently producing a wrong count

use std::collections::VecDeque;

use crate::error::OutOfOrderError;

/// Width of the trailing window, in the caller's time units.
pub const WINDOW: u64 = 3000;

/// Counter of events within the trailing [`WINDOW`] time units.
///
/// # Example
///
/// ```
/// use structkit::window::RecentCounter;
///
/// let mut counter = RecentCounter::new();
/// assert_eq!(counter.ping(1), Ok(1));
/// assert_eq!(counter.ping(100), Ok(2));
/// assert_eq!(counter.ping(3001), Ok(3));
/// assert_eq!(counter.ping(3002), Ok(3)); // timestamp 1 fell out of window
/// ```
#[derive(Debug, Default)]
pub struct RecentCounter {
    events: VecDeque<u64>,
}

impl RecentCounter {
    /// Creates a counter with no recorded events.
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Returns the number of events currently inside the window.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no event is inside the window.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Records an event at `timestamp` and returns how many recorded events
    /// lie within `[timestamp - WINDOW, timestamp]`.
    ///
    /// Fails with [`OutOfOrderError`] if `timestamp` is smaller than the
    /// previously recorded one; the offending timestamp is not recorded and
    /// the retained events are untouched.
    pub fn ping(&mut self, timestamp: u64) -> Result<usize, OutOfOrderError> {
        if let Some(&last) = self.events.back() {
            if timestamp < last {
                return Err(OutOfOrderError {
                    last,
                    attempted: timestamp,
                });
            }
        }
        self.events.push_back(timestamp);

        let cutoff = timestamp.saturating_sub(WINDOW);
        while self.events.front().is_some_and(|&t| t < cutoff) {
            self.events.pop_front();
        }
        Ok(self.events.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sequence() {
        let mut counter = RecentCounter::new();
        assert_eq!(counter.ping(1), Ok(1));
        assert_eq!(counter.ping(100), Ok(2));
        assert_eq!(counter.ping(3001), Ok(3));
        assert_eq!(counter.ping(3002), Ok(3));
    }

    #[test]
    fn boundary_timestamp_is_retained() {
        let mut counter = RecentCounter::new();
        counter.ping(10).unwrap();
        // 10 >= 3010 - WINDOW, so it still counts; eviction is strict.
        assert_eq!(counter.ping(3010), Ok(2));
        assert_eq!(counter.ping(3011), Ok(2));
    }

    #[test]
    fn repeated_timestamp_is_allowed() {
        let mut counter = RecentCounter::new();
        assert_eq!(counter.ping(5), Ok(1));
        assert_eq!(counter.ping(5), Ok(2));
        assert_eq!(counter.ping(5), Ok(3));
    }

    #[test]
    fn out_of_order_timestamp_is_rejected_and_not_recorded() {
        let mut counter = RecentCounter::new();
        counter.ping(100).unwrap();
        let err = counter.ping(50).unwrap_err();
        assert_eq!(
            err,
            OutOfOrderError {
                last: 100,
                attempted: 50
            }
        );
        // The failed ping left the counter usable and unchanged.
        assert_eq!(counter.len(), 1);
        assert_eq!(counter.ping(100), Ok(2));
    }

    #[test]
    fn distant_ping_evicts_everything_older() {
        let mut counter = RecentCounter::new();
        for t in [1, 2, 3] {
            counter.ping(t).unwrap();
        }
        assert_eq!(counter.ping(100_000), Ok(1));
        assert_eq!(counter.len(), 1);
    }

    #[test]
    fn retained_timestamps_all_satisfy_window_invariant() {
        let mut counter = RecentCounter::new();
        let mut latest = 0;
        for t in [1, 10, 500, 2999, 3000, 3001, 6500, 6500, 9000] {
            counter.ping(t).unwrap();
            latest = t;
        }
        let cutoff = latest.saturating_sub(WINDOW);
        assert!(counter.events.iter().all(|&t| t >= cutoff));
    }
}
