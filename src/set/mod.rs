//! Sets with constant-time sampling.

pub mod randomized;

pub use randomized::RandomizedSet;
