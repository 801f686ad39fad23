//! Moderation rule overrides

use crate::core::moderation::types::{Severity, ViolationType};
use serde::{Deserialize, Serialize};

/// Operator-supplied additions to the built-in rule tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Extra dictionary words flagged as abuse
    #[serde(default)]
    pub extra_profanity: Vec<String>,
    /// Extra low-severity promotional keywords
    #[serde(default)]
    pub extra_promotional: Vec<String>,
    /// Extra high-severity scheme/monetisation keywords
    #[serde(default)]
    pub extra_scheme_keywords: Vec<String>,
    /// Extra sensitive-information regex rules
    #[serde(default)]
    pub custom_patterns: Vec<CustomPatternConfig>,
}

/// A regex rule appended to the sensitive-information battery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPatternConfig {
    /// Rule name, used in logs
    pub name: String,
    /// Regex source
    pub pattern: String,
    /// Violation type reported for each match
    pub violation_type: ViolationType,
    /// Severity reported for each match
    pub severity: Severity,
    /// Message shown to the submitter
    pub message: String,
    /// Optional remediation hint
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl RulesConfig {
    /// Merge rule overrides, concatenating lists
    pub fn merge(mut self, other: Self) -> Self {
        self.extra_profanity.extend(other.extra_profanity);
        self.extra_promotional.extend(other.extra_promotional);
        self.extra_scheme_keywords.extend(other.extra_scheme_keywords);
        self.custom_patterns.extend(other.custom_patterns);
        self
    }

    /// Whether any override is present
    pub fn is_empty(&self) -> bool {
        self.extra_profanity.is_empty()
            && self.extra_promotional.is_empty()
            && self.extra_scheme_keywords.is_empty()
            && self.custom_patterns.is_empty()
    }
}
