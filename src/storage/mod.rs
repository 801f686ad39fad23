//! Storage layer for the validator
//!
//! Only the audit trail persists anything; it writes through Redis.

/// Redis key-value store
#[cfg(feature = "redis")]
pub mod redis;
