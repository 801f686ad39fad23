//! Result cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable result caching
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum number of cached verdicts before LRU eviction
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
    /// Entry TTL in seconds, 0 disables expiry
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
}

/// Longest accepted entry TTL, ten years
pub const MAX_CACHE_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_cache_max_entries(),
            ttl_seconds: default_cache_ttl(),
        }
    }
}

impl CacheConfig {
    /// Entry TTL, `None` when entries never expire
    pub fn ttl(&self) -> Option<Duration> {
        (self.ttl_seconds > 0).then(|| Duration::from_secs(self.ttl_seconds))
    }

    /// Merge cache configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.max_entries != default_cache_max_entries() {
            self.max_entries = other.max_entries;
        }
        if other.ttl_seconds != default_cache_ttl() {
            self.ttl_seconds = other.ttl_seconds;
        }
        self
    }
}
