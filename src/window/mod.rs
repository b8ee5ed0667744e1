//! Time-windowed counting.

pub mod counter;

pub use counter::{RecentCounter, WINDOW};
