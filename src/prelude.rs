//! Flat re-export of the crate's public surface.

pub use crate::cache::LruCache;
#[cfg(feature = "metrics")]
pub use crate::cache::LruMetricsSnapshot;
pub use crate::ds::{LinkedList, NodeArena, NodeId};
pub use crate::error::{ConfigError, EmptyError, InvariantError, OutOfOrderError};
pub use crate::set::RandomizedSet;
pub use crate::stack::{MinStack, SpanStack};
pub use crate::tree::{BinaryTree, InOrderIter};
pub use crate::trie::{WildcardTrie, WILDCARD};
pub use crate::window::{RecentCounter, WINDOW};
