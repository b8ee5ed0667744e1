//! Error types for the structkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a construction parameter is invalid
//!   (the only parameterized construction in the crate is the LRU cache's
//!   capacity).
//! - [`EmptyError`]: Returned when `pop`/`top`/`min` is called on an empty
//!   [`MinStack`](crate::stack::MinStack).
//! - [`OutOfOrderError`]: Returned when
//!   [`RecentCounter::ping`](crate::window::RecentCounter::ping) receives a
//!   timestamp smaller than the previous one.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (debug-only `check_invariants` methods).
//!
//! A failed call never leaves its structure partially mutated: every error is
//! reported before any state changes, so callers may keep using the instance.
//!
//! "Not found" outcomes (cache miss, unmatched trie pattern, exhausted
//! iterator) are ordinary `None`/`false` returns, not errors.
//!
//! ## Example Usage
//!
//! ```
//! use structkit::cache::LruCache;
//! use structkit::error::ConfigError;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<LruCache<u64, String>, ConfigError> = LruCache::try_new(8);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = LruCache::<u64, String>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when a construction parameter is invalid.
///
/// Produced by fallible constructors such as
/// [`LruCache::try_new`](crate::cache::LruCache::try_new). Carries a
/// human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use structkit::cache::LruCache;
///
/// let err = LruCache::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// EmptyError
// ---------------------------------------------------------------------------

/// Error returned when an element-accessing operation is called on an empty
/// structure.
///
/// Produced by [`MinStack::pop`](crate::stack::MinStack::pop),
/// [`MinStack::top`](crate::stack::MinStack::top) and
/// [`MinStack::min`](crate::stack::MinStack::min). The structure is left
/// empty, not corrupted; pushing after a failed `pop` works normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("operation on empty structure")
    }
}

impl std::error::Error for EmptyError {}

// ---------------------------------------------------------------------------
// OutOfOrderError
// ---------------------------------------------------------------------------

/// Error returned when a timestamp arrives out of order.
///
/// Produced by [`RecentCounter::ping`](crate::window::RecentCounter::ping)
/// when the supplied timestamp is smaller than the previously recorded one.
/// The offending timestamp is not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfOrderError {
    /// The most recent timestamp the structure had already accepted.
    pub last: u64,
    /// The rejected, smaller timestamp.
    pub attempted: u64,
}

impl fmt::Display for OutOfOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "timestamp {} is out of order (last accepted: {})",
            self.attempted, self.last
        )
    }
}

impl std::error::Error for OutOfOrderError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal structure invariants are violated.
///
/// Produced by debug-only `check_invariants` methods (e.g.
/// [`LruCache::check_invariants`](crate::cache::LruCache::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
