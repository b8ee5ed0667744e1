//! Prefix-tree structures.

pub mod wildcard;

pub use wildcard::{WildcardTrie, WILDCARD};
