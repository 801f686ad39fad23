//! Audit trail configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Violation audit trail configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Write audit records for violating submissions
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Record expiry in seconds
    #[serde(default = "default_audit_ttl")]
    pub ttl_seconds: u64,
    /// Key prefix, records land under `<prefix>:<user_id>:<unix_millis>`
    #[serde(default = "default_audit_key_prefix")]
    pub key_prefix: String,
    /// Number of leading content characters kept in a record
    #[serde(default = "default_audit_preview_chars")]
    pub content_preview_chars: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: default_audit_ttl(),
            key_prefix: default_audit_key_prefix(),
            content_preview_chars: default_audit_preview_chars(),
        }
    }
}

impl AuditConfig {
    /// Merge audit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.ttl_seconds != default_audit_ttl() {
            self.ttl_seconds = other.ttl_seconds;
        }
        if other.key_prefix != default_audit_key_prefix() {
            self.key_prefix = other.key_prefix;
        }
        if other.content_preview_chars != default_audit_preview_chars() {
            self.content_preview_chars = other.content_preview_chars;
        }
        self
    }
}
