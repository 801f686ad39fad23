//! Audit sinks
//!
//! The validator hands every record to an [`AuditSink`]. Failures are
//! reported back but never reach the caller of `validate_content`.

use super::types::AuditRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;

/// Destination for audit records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Persist one record
    async fn record(&self, record: &AuditRecord) -> Result<()>;
}

/// Sink that discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

#[async_trait]
impl AuditSink for NoopAuditSink {
    async fn record(&self, _record: &AuditRecord) -> Result<()> {
        Ok(())
    }
}

/// In-process sink keyed by user id
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    records: DashMap<String, Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Records written for `user_id`, oldest first
    pub fn records_for(&self, user_id: &str) -> Vec<AuditRecord> {
        self.records
            .get(user_id)
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Total number of records across all users
    pub fn len(&self) -> usize {
        self.records.iter().map(|entry| entry.value().len()).sum()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn record(&self, record: &AuditRecord) -> Result<()> {
        self.records
            .entry(record.user_id.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }
}

#[cfg(feature = "redis")]
pub use redis_sink::RedisAuditSink;

#[cfg(feature = "redis")]
mod redis_sink {
    use super::*;
    use crate::config::AuditConfig;
    use crate::storage::redis::RedisPool;
    use std::sync::Arc;
    use tracing::debug;

    /// Sink writing JSON records to Redis with an expiry
    #[derive(Debug, Clone)]
    pub struct RedisAuditSink {
        pool: Arc<RedisPool>,
        key_prefix: String,
        ttl_seconds: u64,
    }

    impl RedisAuditSink {
        /// Create a sink over an existing pool
        pub fn new(pool: Arc<RedisPool>, config: &AuditConfig) -> Self {
            Self {
                pool,
                key_prefix: config.key_prefix.clone(),
                ttl_seconds: config.ttl_seconds,
            }
        }

        /// Underlying pool
        pub fn pool(&self) -> &RedisPool {
            &self.pool
        }
    }

    #[async_trait]
    impl AuditSink for RedisAuditSink {
        async fn record(&self, record: &AuditRecord) -> Result<()> {
            let key = record.key(&self.key_prefix);
            let value = serde_json::to_string(record)?;
            self.pool.set(&key, &value, Some(self.ttl_seconds)).await?;
            debug!("Audit record written to {}", key);
            Ok(())
        }
    }
}
