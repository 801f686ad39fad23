//! Verdict cache implementation
//!
//! A single LRU tier behind a `parking_lot` mutex. The lock is only held for
//! the lookup or insert itself, never while content is being scanned.

use super::types::{AtomicCacheStats, CacheEntry, CacheKey, CacheStats};
use crate::config::CacheConfig;
use crate::core::moderation::types::ValidationResult;
use crate::utils::error::{Result, ValidatorError};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tracing::debug;

/// Bounded, optionally expiring cache of validation results
pub struct ValidationCache {
    entries: Mutex<LruCache<CacheKey, CacheEntry<Arc<ValidationResult>>>>,
    ttl: Option<Duration>,
    stats: Arc<AtomicCacheStats>,
}

impl ValidationCache {
    /// Create a new cache from configuration
    pub fn new(config: &CacheConfig) -> Result<Self> {
        let capacity = NonZeroUsize::new(config.max_entries).ok_or_else(|| {
            ValidatorError::Config(
                "Invalid cache configuration: max_entries must be greater than 0".to_string(),
            )
        })?;

        Ok(Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl: config.ttl(),
            stats: Arc::new(AtomicCacheStats::default()),
        })
    }

    /// Get a cached verdict, dropping it if it has expired
    pub fn get(&self, key: &CacheKey) -> Option<Arc<ValidationResult>> {
        let mut entries = self.entries.lock();
        if let Some(entry) = entries.get_mut(key) {
            if !entry.is_expired() {
                entry.mark_accessed();
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for key: {:?}", key);
                return Some(Arc::clone(&entry.value));
            }
            entries.pop(key);
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
        }

        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Store a verdict, evicting the least recently used entry when full
    pub fn put(&self, key: CacheKey, result: Arc<ValidationResult>) {
        let entry = CacheEntry::new(result, self.ttl);
        let displaced = self.entries.lock().push(key.clone(), entry);

        // `push` hands back the old value for a replaced key, which is not an eviction
        if displaced.is_some_and(|(old_key, _)| old_key != key) {
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
        }
        self.stats.inserts.fetch_add(1, Ordering::Relaxed);
        debug!("Cached verdict for key: {:?}", key);
    }

    /// Number of cached verdicts, expired ones included until touched
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Get cache statistics (lock-free snapshot)
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    /// Drop every entry and reset statistics
    pub fn clear(&self) {
        self.entries.lock().clear();
        self.stats.reset();
    }
}

impl std::fmt::Debug for ValidationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationCache")
            .field("len", &self.len())
            .field("ttl", &self.ttl)
            .field("stats", &self.stats())
            .finish()
    }
}
