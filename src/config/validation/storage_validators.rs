//! Storage configuration validators
//!
//! This module provides validation implementations for the result cache,
//! the audit trail and the Redis connection settings.

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.max_entries == 0 {
            return Err("Cache max entries must be greater than 0".to_string());
        }

        if self.ttl_seconds > MAX_CACHE_TTL_SECONDS {
            return Err(format!(
                "Cache TTL cannot exceed {} seconds",
                MAX_CACHE_TTL_SECONDS
            ));
        }

        Ok(())
    }
}

impl Validate for AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.ttl_seconds == 0 {
            return Err("Audit TTL must be greater than 0".to_string());
        }

        if self.key_prefix.trim().is_empty() {
            return Err("Audit key prefix cannot be empty".to_string());
        }

        if self.key_prefix.contains(char::is_whitespace) {
            return Err("Audit key prefix cannot contain whitespace".to_string());
        }

        if self.content_preview_chars == 0 {
            return Err("Audit content preview must keep at least 1 character".to_string());
        }

        Ok(())
    }
}

impl Validate for RedisConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.url.is_empty() {
            return Err("Redis URL cannot be empty".to_string());
        }

        if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
            return Err("Redis URL must start with redis:// or rediss://".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Redis connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
