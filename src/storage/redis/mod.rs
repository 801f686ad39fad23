//! Redis storage implementation
//!
//! This module provides Redis connectivity and the key-value operations the
//! audit trail writes through.
//!
//! ## Module Structure
//!
//! - `pool` - Connection pool, no-op mode and health checks
//! - `cache` - Key-value operations (get, set with expiry)
//! - `tests` - Module tests

// Module declarations
mod cache;
mod pool;

// Re-export public types
pub use pool::{RedisConnection, RedisPool};
