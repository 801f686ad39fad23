//! Audit record types

use crate::core::moderation::types::{Severity, ValidationResult, ViolationType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one violation kept in the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditViolation {
    /// Violation type
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    /// Severity level
    pub severity: Severity,
    /// Message shown to the submitter
    pub message: String,
}

/// A flagged submission, stored as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    /// Submitting user
    pub user_id: String,
    /// Context tag the content was validated for
    pub context: String,
    /// Leading characters of the submitted content
    pub content: String,
    /// Violations in scan order
    pub violations: Vec<AuditViolation>,
    /// Verdict score
    pub score: u32,
    /// When the submission was validated
    pub timestamp: DateTime<Utc>,
}

impl AuditRecord {
    /// Build a record for `result`, keeping the first `preview_chars` characters
    pub fn new(
        user_id: &str,
        context: &str,
        content: &str,
        result: &ValidationResult,
        preview_chars: usize,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            context: context.to_string(),
            content: content.chars().take(preview_chars).collect(),
            violations: result
                .violations
                .iter()
                .map(|v| AuditViolation {
                    violation_type: v.violation_type,
                    severity: v.severity,
                    message: v.message.clone(),
                })
                .collect(),
            score: result.score,
            timestamp: Utc::now(),
        }
    }

    /// Storage key, `<prefix>:<user_id>:<unix_millis>`
    pub fn key(&self, prefix: &str) -> String {
        format!(
            "{}:{}:{}",
            prefix,
            self.user_id,
            self.timestamp.timestamp_millis()
        )
    }
}
