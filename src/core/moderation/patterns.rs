//! Sensitive-information and contact-intent patterns
//!
//! Rule tables are plain data; `ContentRule::compile` turns each entry into a
//! regex once, when a `ModerationRules` value is built.

use super::types::{Severity, Violation, ViolationType};
use crate::utils::error::{Result, ValidatorError};
use regex::Regex;

/// Static description of a regex rule
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    /// Rule name, used in logs
    pub name: &'static str,
    /// Regex source
    pub pattern: &'static str,
    /// Violation type reported per match
    pub violation_type: ViolationType,
    /// Severity reported per match
    pub severity: Severity,
    /// Message shown to the submitter
    pub message: &'static str,
    /// Remediation hint
    pub suggestion: Option<&'static str>,
}

const PHONE_SUGGESTION: Option<&str> =
    Some("Remove phone numbers and use in-app messaging to talk to the other party");
const EMAIL_SUGGESTION: Option<&str> =
    Some("Remove email addresses and use in-app messaging to talk to the other party");
const SOCIAL_SUGGESTION: Option<&str> =
    Some("Keep the conversation on the platform instead of moving to other apps");
const LOCATION_SUGGESTION: Option<&str> =
    Some("Share only your general area; exact addresses are shared after a job is confirmed");
const LINK_SUGGESTION: Option<&str> = Some("Remove links to external websites");

/// Contact leaks, location sharing and external links, in scan order
pub const SENSITIVE_INFO_RULES: &[RuleSpec] = &[
    // Phone numbers
    RuleSpec {
        name: "indian_mobile",
        pattern: r"\b[6-9]\d{9}\b",
        violation_type: ViolationType::PhoneNumber,
        severity: Severity::Critical,
        message: "Phone numbers are not allowed",
        suggestion: PHONE_SUGGESTION,
    },
    RuleSpec {
        name: "indian_mobile_country_code",
        pattern: r"\+91[\s-]?[6-9]\d{9}\b",
        violation_type: ViolationType::PhoneNumber,
        severity: Severity::Critical,
        message: "Phone numbers with country code are not allowed",
        suggestion: PHONE_SUGGESTION,
    },
    RuleSpec {
        name: "formatted_phone",
        pattern: r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b",
        violation_type: ViolationType::PhoneNumber,
        severity: Severity::High,
        message: "Formatted phone numbers are not allowed",
        suggestion: PHONE_SUGGESTION,
    },
    RuleSpec {
        name: "spaced_mobile",
        pattern: r"\b[6-9]\d{4}[\s-]\d{5}\b",
        violation_type: ViolationType::PhoneNumber,
        severity: Severity::High,
        message: "Phone numbers are not allowed",
        suggestion: PHONE_SUGGESTION,
    },
    RuleSpec {
        name: "call_me_at",
        pattern: r"(?i)\b(?:call|ring|phone|text|whatsapp)\s+(?:me\s+)?(?:at|on)\s*:?\s*\+?\d[\d\s-]{7,}\d",
        violation_type: ViolationType::PhoneNumber,
        severity: Severity::Critical,
        message: "Requests to call a phone number are not allowed",
        suggestion: PHONE_SUGGESTION,
    },
    // Email addresses
    RuleSpec {
        name: "email",
        pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        violation_type: ViolationType::EmailAddress,
        severity: Severity::Critical,
        message: "Email addresses are not allowed",
        suggestion: EMAIL_SUGGESTION,
    },
    RuleSpec {
        name: "obfuscated_email",
        pattern: r"(?i)\b[a-z0-9._%+-]+\s*(?:\[at\]|\(at\)|\bat\b)\s*[a-z0-9-]+(?:\s*(?:\[dot\]|\(dot\)|\bdot\b)\s*[a-z]{2,})+\b",
        violation_type: ViolationType::EmailAddress,
        severity: Severity::High,
        message: "Disguised email addresses are not allowed",
        suggestion: EMAIL_SUGGESTION,
    },
    // Social media and messaging apps
    RuleSpec {
        name: "whatsapp",
        pattern: r"(?i)\b(?:whats\s?app|whatsap|watsapp|wa\.me)\b",
        violation_type: ViolationType::SocialMedia,
        severity: Severity::High,
        message: "References to WhatsApp are not allowed",
        suggestion: SOCIAL_SUGGESTION,
    },
    RuleSpec {
        name: "telegram",
        pattern: r"(?i)\b(?:telegram|t\.me)\b",
        violation_type: ViolationType::SocialMedia,
        severity: Severity::High,
        message: "References to Telegram are not allowed",
        suggestion: SOCIAL_SUGGESTION,
    },
    RuleSpec {
        name: "instagram",
        pattern: r"(?i)\b(?:instagram|insta)\b",
        violation_type: ViolationType::SocialMedia,
        severity: Severity::Medium,
        message: "References to Instagram are not allowed",
        suggestion: SOCIAL_SUGGESTION,
    },
    RuleSpec {
        name: "facebook",
        pattern: r"(?i)\b(?:facebook|fb\.com|messenger)\b",
        violation_type: ViolationType::SocialMedia,
        severity: Severity::Medium,
        message: "References to Facebook are not allowed",
        suggestion: SOCIAL_SUGGESTION,
    },
    RuleSpec {
        name: "snapchat",
        pattern: r"(?i)\bsnap\s?chat\b",
        violation_type: ViolationType::SocialMedia,
        severity: Severity::Medium,
        message: "References to Snapchat are not allowed",
        suggestion: SOCIAL_SUGGESTION,
    },
    RuleSpec {
        name: "social_handle",
        pattern: r"\B@[A-Za-z0-9_][A-Za-z0-9_.]{2,29}",
        violation_type: ViolationType::SocialMedia,
        severity: Severity::Medium,
        message: "Social media handles are not allowed",
        suggestion: SOCIAL_SUGGESTION,
    },
    // Location sharing
    RuleSpec {
        name: "maps_link",
        pattern: r"(?i)\b(?:maps\.google\.[a-z.]+|google\.[a-z.]+/maps|goo\.gl/maps|maps\.app\.goo\.gl)\S*",
        violation_type: ViolationType::LocationSharing,
        severity: Severity::High,
        message: "Map links are not allowed",
        suggestion: LOCATION_SUGGESTION,
    },
    RuleSpec {
        name: "home_address",
        pattern: r"(?i)\b(?:my|our)\s+(?:home\s+|house\s+|exact\s+)?address\s+is\b",
        violation_type: ViolationType::LocationSharing,
        severity: Severity::Medium,
        message: "Sharing a personal address is not allowed",
        suggestion: LOCATION_SUGGESTION,
    },
    RuleSpec {
        name: "pin_code",
        pattern: r"(?i)\bpin\s?code\s*[:-]?\s*[1-9]\d{5}\b",
        violation_type: ViolationType::LocationSharing,
        severity: Severity::Medium,
        message: "Sharing an exact PIN code is not allowed",
        suggestion: LOCATION_SUGGESTION,
    },
    // External links
    RuleSpec {
        name: "url",
        pattern: r#"(?i)\bhttps?://[^\s<>"']+"#,
        violation_type: ViolationType::ExternalLink,
        severity: Severity::High,
        message: "External links are not allowed",
        suggestion: LINK_SUGGESTION,
    },
    RuleSpec {
        name: "www_host",
        pattern: r#"(?i)\bwww\.[a-z0-9-]+\.[^\s<>"']+"#,
        violation_type: ViolationType::ExternalLink,
        severity: Severity::High,
        message: "External links are not allowed",
        suggestion: LINK_SUGGESTION,
    },
    RuleSpec {
        name: "link_shortener",
        pattern: r"(?i)\b(?:bit\.ly|tinyurl\.com|goo\.gl|t\.co|ow\.ly|is\.gd|buff\.ly|cutt\.ly|rb\.gy|shorturl\.at)/\S+",
        violation_type: ViolationType::ExternalLink,
        severity: Severity::High,
        message: "Shortened links are not allowed",
        suggestion: LINK_SUGGESTION,
    },
];

const CONTACT_INTENT_MESSAGE: &str = "Asking to be contacted outside the platform is not allowed";
const CONTACT_INTENT_SUGGESTION: Option<&str> =
    Some("Use the in-app chat; contact details are exchanged once a job is confirmed");

/// Contact-intent phrasing, checked only for public contexts
pub const CONTACT_INTENT_RULES: &[RuleSpec] = &[
    RuleSpec {
        name: "contact_me",
        pattern: r"(?i)\b(?:contact|call|text|message|ping|reach)\s+me\b",
        violation_type: ViolationType::SocialMedia,
        severity: Severity::High,
        message: CONTACT_INTENT_MESSAGE,
        suggestion: CONTACT_INTENT_SUGGESTION,
    },
    RuleSpec {
        name: "dm_me",
        pattern: r"(?i)\bdm\s+me\b",
        violation_type: ViolationType::SocialMedia,
        severity: Severity::High,
        message: CONTACT_INTENT_MESSAGE,
        suggestion: CONTACT_INTENT_SUGGESTION,
    },
    RuleSpec {
        name: "send_your_details",
        pattern: r"(?i)\bsend\s+(?:me\s+)?(?:your|ur)\s+(?:number|no\.?|phone(?:\s+number)?|mobile(?:\s+number)?|email|e-mail|mail\s+id|whats\s?app)",
        violation_type: ViolationType::SocialMedia,
        severity: Severity::High,
        message: CONTACT_INTENT_MESSAGE,
        suggestion: CONTACT_INTENT_SUGGESTION,
    },
    RuleSpec {
        name: "my_number_is",
        pattern: r"(?i)\bmy\s+(?:number|no|phone(?:\s+number)?|mobile(?:\s+number)?|cell|contact(?:\s+number)?)\s+is\b",
        violation_type: ViolationType::SocialMedia,
        severity: Severity::High,
        message: CONTACT_INTENT_MESSAGE,
        suggestion: CONTACT_INTENT_SUGGESTION,
    },
];

/// A compiled rule producing one violation per match
#[derive(Debug, Clone)]
pub struct ContentRule {
    /// Rule name, used in logs
    pub name: String,
    /// Compiled pattern
    pub regex: Regex,
    /// Violation type reported per match
    pub violation_type: ViolationType,
    /// Severity reported per match
    pub severity: Severity,
    /// Message shown to the submitter
    pub message: String,
    /// Remediation hint
    pub suggestion: Option<String>,
}

impl ContentRule {
    /// Compile a rule from its parts
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        violation_type: ViolationType,
        severity: Severity,
        message: impl Into<String>,
        suggestion: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|e| ValidatorError::pattern(&name, &e))?;
        Ok(Self {
            name,
            regex,
            violation_type,
            severity,
            message: message.into(),
            suggestion,
        })
    }

    /// Compile a static rule table entry
    pub fn compile(spec: &RuleSpec) -> Result<Self> {
        Self::new(
            spec.name,
            spec.pattern,
            spec.violation_type,
            spec.severity,
            spec.message,
            spec.suggestion.map(str::to_string),
        )
    }

    /// Compile a case-insensitive whole-word rule for a literal keyword
    pub fn keyword(
        keyword: &str,
        violation_type: ViolationType,
        severity: Severity,
        message: impl Into<String>,
        suggestion: Option<String>,
    ) -> Result<Self> {
        Self::new(
            keyword,
            &word_pattern(keyword),
            violation_type,
            severity,
            message,
            suggestion,
        )
    }

    /// Append one violation per match in `text`
    pub fn scan(&self, text: &str, out: &mut Vec<Violation>) {
        for m in self.regex.find_iter(text) {
            out.push(Violation {
                violation_type: self.violation_type,
                severity: self.severity,
                message: self.message.clone(),
                matched: m.as_str().to_string(),
                position: char_offset(text, m.start()),
                suggestion: self.suggestion.clone(),
            });
        }
    }
}

/// Case-insensitive pattern matching `word` literally, anchored on word
/// boundaries wherever its first or last character is a word character.
pub fn word_pattern(word: &str) -> String {
    let word = word.trim();
    let escaped = regex::escape(word);
    let lead = if word.chars().next().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    let trail = if word.chars().last().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    format!("(?i){lead}{escaped}{trail}")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convert a byte offset into a character offset
pub fn char_offset(text: &str, byte_idx: usize) -> usize {
    text[..byte_idx].chars().count()
}

/// Compile a rule table, logging and skipping entries that fail
pub fn compile_table(specs: &[RuleSpec], skipped: &mut Vec<String>) -> Vec<ContentRule> {
    specs
        .iter()
        .filter_map(|spec| match ContentRule::compile(spec) {
            Ok(rule) => Some(rule),
            Err(e) => {
                tracing::error!("Dropping moderation rule: {}", e);
                skipped.push(spec.name.to_string());
                None
            }
        })
        .collect()
}
