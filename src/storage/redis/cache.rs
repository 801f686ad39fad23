//! Redis key-value operations
//!
//! Every operation is a silent no-op when the pool runs without Redis.

use super::pool::RedisPool;
use crate::utils::error::{Result, ValidatorError};
use redis::{AsyncCommands, RedisResult};

impl RedisPool {
    /// Get a value
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.noop_mode {
            return Ok(None);
        }

        let mut conn = self.get_connection().await?;
        if let Some(ref mut c) = conn.conn {
            let result: RedisResult<Option<String>> = c.get(key).await;
            result.map_err(ValidatorError::Redis)
        } else {
            Ok(None)
        }
    }

    /// Set a key-value pair with optional TTL in seconds
    pub async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<()> {
        if self.noop_mode {
            return Ok(());
        }

        let mut conn = self.get_connection().await?;
        if let Some(ref mut c) = conn.conn {
            if let Some(ttl_seconds) = ttl {
                let _: () = c
                    .set_ex(key, value, ttl_seconds)
                    .await
                    .map_err(ValidatorError::Redis)?;
            } else {
                let _: () = c.set(key, value).await.map_err(ValidatorError::Redis)?;
            }
        }
        Ok(())
    }
}
