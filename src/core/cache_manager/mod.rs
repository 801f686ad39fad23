//! Verdict cache
//!
//! Bounded LRU cache of validation results keyed by context and a content
//! fingerprint, with optional TTL and lock-free hit/miss counters.

pub mod manager;
pub mod types;

pub use manager::ValidationCache;
pub use types::{AtomicCacheStats, CacheEntry, CacheKey, CacheStats};
