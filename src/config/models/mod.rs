//! Configuration data models
//!
//! This module defines all configuration structures used by the validator.

#![allow(missing_docs)]

pub mod audit;
pub mod cache;
pub mod logging;
pub mod rules;
pub mod storage;
pub mod validator;

// Re-export all configuration types
pub use audit::*;
pub use cache::*;
pub use logging::*;
pub use rules::*;
pub use storage::*;
pub use validator::*;

/// Default result cache capacity
pub fn default_cache_max_entries() -> usize {
    10_000
}

/// Default result cache TTL in seconds
pub fn default_cache_ttl() -> u64 {
    3600
}

/// Default audit record expiry in seconds (30 days)
pub fn default_audit_ttl() -> u64 {
    30 * 24 * 60 * 60
}

/// Default audit key prefix
pub fn default_audit_key_prefix() -> String {
    "content_violations".to_string()
}

/// Default number of content characters kept in an audit record
pub fn default_audit_preview_chars() -> usize {
    100
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default log filter directive
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Default true value
pub fn default_true() -> bool {
    true
}
