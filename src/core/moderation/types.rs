//! Moderation type definitions
//!
//! Core types produced and consumed by the content validator.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Score at or above which content is rejected
pub const REJECTION_THRESHOLD: u32 = 10;

/// Placeholder substituted for high and critical matches
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Functional area a piece of text is destined for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentContext {
    /// Job posting body
    JobDescription,
    /// Application sent to a job poster
    JobApplication,
    /// Public comment thread
    Comment,
    /// Review left after a job
    Review,
    /// Username, bio or other profile field
    Profile,
    /// One-to-one chat, never moderated
    PrivateMessage,
    /// Unrecognised tag, matches no context-specific rule
    Other(String),
}

impl ContentContext {
    /// Wire name of the context tag
    pub fn as_str(&self) -> &str {
        match self {
            ContentContext::JobDescription => "job_description",
            ContentContext::JobApplication => "job_application",
            ContentContext::Comment => "comment",
            ContentContext::Review => "review",
            ContentContext::Profile => "profile",
            ContentContext::PrivateMessage => "private_message",
            ContentContext::Other(tag) => tag,
        }
    }

    /// Contexts where contact-intent phrasing is flagged
    pub fn checks_contact_intent(&self) -> bool {
        matches!(
            self,
            ContentContext::Comment | ContentContext::JobDescription | ContentContext::Review
        )
    }
}

impl FromStr for ContentContext {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "job_description" => ContentContext::JobDescription,
            "job_application" => ContentContext::JobApplication,
            "comment" => ContentContext::Comment,
            "review" => ContentContext::Review,
            "profile" => ContentContext::Profile,
            "private_message" => ContentContext::PrivateMessage,
            other => ContentContext::Other(other.to_string()),
        })
    }
}

impl From<&str> for ContentContext {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(context) => context,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ContentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ContentContext {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentContext {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ContentContext::from(tag.as_str()))
    }
}

/// Kind of detected issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// Phone number
    PhoneNumber,
    /// Email address, plain or spelled out
    EmailAddress,
    /// Social media handle or off-platform contact request
    SocialMedia,
    /// Map link, address or PIN code
    LocationSharing,
    /// URL or link shortener
    ExternalLink,
    /// Profane word
    Profanity,
    /// Abusive or insulting language
    Abuse,
    /// Spam, schemes or shouting
    Spam,
    /// Promotional wording
    Promotional,
    /// Repeated text
    Repetitive,
}

impl ViolationType {
    /// Types that reveal direct contact details
    pub fn is_contact_detail(self) -> bool {
        matches!(self, ViolationType::PhoneNumber | ViolationType::EmailAddress)
    }

    /// Types that concern offensive language
    pub fn is_offensive_language(self) -> bool {
        matches!(self, ViolationType::Profanity | ViolationType::Abuse)
    }
}

/// Severity levels, weighted 1 to 4 in the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// Low severity
    Low = 1,
    /// Medium severity
    Medium = 2,
    /// High severity, redacted
    High = 3,
    /// Critical severity, redacted
    Critical = 4,
}

impl Severity {
    /// Score contribution
    pub fn weight(self) -> u32 {
        self as u32
    }

    /// Whether matches at this severity are redacted from cleaned content
    pub fn is_redacted(self) -> bool {
        self >= Severity::High
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity as u8
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Severity::Low),
            2 => Ok(Severity::Medium),
            3 => Ok(Severity::High),
            4 => Ok(Severity::Critical),
            other => Err(format!("severity must be between 1 and 4, got {other}")),
        }
    }
}

/// A single detected issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Issue type
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    /// Severity level
    pub severity: Severity,
    /// Human-readable explanation
    pub message: String,
    /// Exact substring that triggered the rule
    #[serde(rename = "match")]
    pub matched: String,
    /// Offset of the match in the original text, in characters
    pub position: usize,
    /// Remediation hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Verdict for one piece of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// `true` iff `score < REJECTION_THRESHOLD`
    pub is_valid: bool,
    /// Violations in scan order
    pub violations: Vec<Violation>,
    /// Sum of severity weights
    pub score: u32,
    /// Content with high and critical matches redacted, trimmed
    pub cleaned_content: String,
    /// Deduplicated remediation messages
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    /// Verdict for content that is never moderated
    pub fn pass_through(content: &str) -> Self {
        Self {
            is_valid: true,
            violations: Vec::new(),
            score: 0,
            cleaned_content: content.to_string(),
            suggestions: Vec::new(),
        }
    }

    /// Whether any violation of the given type was found
    pub fn has_violation(&self, violation_type: ViolationType) -> bool {
        self.violations
            .iter()
            .any(|v| v.violation_type == violation_type)
    }

    /// Violations of the given type
    pub fn violations_of(&self, violation_type: ViolationType) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |v| v.violation_type == violation_type)
    }
}

/// A failing entry from `validate_skills`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillViolation {
    /// Skill string that failed
    pub skill: String,
    /// Its verdict
    pub result: std::sync::Arc<ValidationResult>,
}
