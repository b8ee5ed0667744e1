//! Capacity-bounded caching.

pub mod lru;
#[cfg(feature = "metrics")]
pub mod metrics;

pub use lru::LruCache;
#[cfg(feature = "metrics")]
pub use metrics::LruMetricsSnapshot;
