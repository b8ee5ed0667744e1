//! structkit: classical in-memory data structures with explicit complexity
//! contracts.
//!
//! Independent, single-threaded structures: a fixed-capacity LRU cache, a
//! wildcard trie, a min-tracking stack, a monotonic span stack, a bounded
//! in-order tree iterator, a sliding-window counter, and a randomized set.
//! None of them depends on the others; they share only the low-level
//! primitives in [`ds`].
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod cache;
pub mod ds;
pub mod error;
pub mod set;
pub mod stack;
pub mod tree;
pub mod trie;
pub mod window;

pub mod prelude;
