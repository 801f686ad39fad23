//! Cache type definitions
//!
//! Cache entries, keys and statistics used by the verdict cache.

use crate::core::moderation::types::ContentContext;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Cache entry with metadata
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached value
    pub value: T,
    /// When the entry was created
    pub created_at: Instant,
    /// When the entry expires, `None` for entries that never expire
    pub expires_at: Option<Instant>,
    /// Access count for popularity tracking
    pub access_count: u64,
}

impl<T> CacheEntry<T> {
    /// Create a new cache entry; a TTL past the clock's range never expires
    pub fn new(value: T, ttl: Option<Duration>) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            expires_at: ttl.and_then(|ttl| now.checked_add(ttl)),
            access_count: 0,
        }
    }

    /// Check if the entry is expired
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }

    /// Mark the entry as accessed
    pub fn mark_accessed(&mut self) {
        self.access_count += 1;
    }

    /// Get the age of the entry
    pub fn age(&self) -> Duration {
        Instant::now().duration_since(self.created_at)
    }
}

/// Cache key: context tag plus a 128-bit SHA-256 content fingerprint
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Context the content was validated for
    pub context: ContentContext,
    /// Leading 128 bits of `SHA-256(context || 0x00 || content)`
    pub fingerprint: u128,
}

impl CacheKey {
    /// Create a cache key for a piece of content
    pub fn new(content: &str, context: &ContentContext) -> Self {
        Self {
            context: context.clone(),
            fingerprint: Self::fingerprint(content, context),
        }
    }

    fn fingerprint(content: &str, context: &ContentContext) -> u128 {
        let mut hasher = Sha256::new();
        hasher.update(context.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(content.as_bytes());
        let digest = hasher.finalize();

        let mut leading = [0u8; 16];
        leading.copy_from_slice(&digest[..16]);
        u128::from_be_bytes(leading)
    }
}

impl fmt::Debug for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CacheKey({}:{})",
            self.context,
            hex::encode(self.fingerprint.to_be_bytes())
        )
    }
}

/// Atomic cache statistics for lock-free hot path updates
#[derive(Debug, Default)]
pub struct AtomicCacheStats {
    /// Cache hits
    pub hits: AtomicU64,
    /// Cache misses, expired entries included
    pub misses: AtomicU64,
    /// Entries pushed out by capacity or expiry
    pub evictions: AtomicU64,
    /// Entries stored
    pub inserts: AtomicU64,
}

/// Cache statistics snapshot (returned to callers)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Cache hits
    pub hits: u64,
    /// Cache misses
    pub misses: u64,
    /// Cache evictions
    pub evictions: u64,
    /// Entries stored
    pub inserts: u64,
}

impl CacheStats {
    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        let total_requests = self.hits + self.misses;

        if total_requests == 0 {
            0.0
        } else {
            self.hits as f64 / total_requests as f64
        }
    }
}

impl AtomicCacheStats {
    /// Create a snapshot of current stats
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
        }
    }

    /// Reset all stats to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.inserts.store(0, Ordering::Relaxed);
    }
}
