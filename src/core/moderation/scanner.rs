//! Four-pass content scan and verdict assembly

use super::rules::ModerationRules;
use super::spam::{scan_caps, scan_repetition};
use super::types::*;

/// Comments longer than this (in characters) are flagged as spam
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// Added once when phone numbers or email addresses were found
pub const CONTACT_ADVISORY: &str =
    "Contact details are shared automatically through private messages once a job is confirmed.";

/// Added once when abusive language was found
pub const LANGUAGE_ADVISORY: &str = "Please keep your language respectful and professional.";

const LONG_COMMENT_MESSAGE: &str = "Comment is too long";
const LONG_COMMENT_SUGGESTION: &str = "Keep comments under 1000 characters";

/// Run every pass over `content` and assemble the verdict.
///
/// Private messages are never scanned and come back unchanged.
pub fn analyze(rules: &ModerationRules, content: &str, context: &ContentContext) -> ValidationResult {
    if *context == ContentContext::PrivateMessage {
        return ValidationResult::pass_through(content);
    }

    let mut violations = Vec::new();
    scan_sensitive_info(rules, content, &mut violations);
    scan_profanity(rules, content, &mut violations);
    scan_spam(rules, content, &mut violations);
    scan_context(rules, content, context, &mut violations);

    ValidationResult::from_violations(content, violations)
}

/// Contact details, social media, location sharing and links
pub fn scan_sensitive_info(rules: &ModerationRules, content: &str, out: &mut Vec<Violation>) {
    for rule in rules.sensitive_info() {
        rule.scan(content, out);
    }
}

/// Dictionary abuse
pub fn scan_profanity(rules: &ModerationRules, content: &str, out: &mut Vec<Violation>) {
    rules.profanity().scan(content, out);
}

/// Promotional and scheme keywords, repetition, shouting
pub fn scan_spam(rules: &ModerationRules, content: &str, out: &mut Vec<Violation>) {
    for rule in rules.promotional().iter().chain(rules.schemes()) {
        rule.scan(content, out);
    }
    scan_repetition(content, out);
    scan_caps(content, out);
}

/// Rules that only apply to some contexts
pub fn scan_context(
    rules: &ModerationRules,
    content: &str,
    context: &ContentContext,
    out: &mut Vec<Violation>,
) {
    if context.checks_contact_intent() {
        for rule in rules.contact_intent() {
            rule.scan(content, out);
        }
    }

    if *context == ContentContext::Comment && content.chars().count() > MAX_COMMENT_LENGTH {
        out.push(Violation {
            violation_type: ViolationType::Spam,
            severity: Severity::Low,
            message: LONG_COMMENT_MESSAGE.to_string(),
            matched: content.to_string(),
            position: 0,
            suggestion: Some(LONG_COMMENT_SUGGESTION.to_string()),
        });
    }
}

impl ValidationResult {
    /// Score, redact and collect suggestions for a finished scan
    pub fn from_violations(content: &str, violations: Vec<Violation>) -> Self {
        let score = violations.iter().map(|v| v.severity.weight()).sum::<u32>();

        Self {
            is_valid: score < REJECTION_THRESHOLD,
            score,
            cleaned_content: redact(content, &violations),
            suggestions: collect_suggestions(&violations),
            violations,
        }
    }
}

/// Replace every occurrence of each high or critical match, then trim
pub fn redact(content: &str, violations: &[Violation]) -> String {
    let mut cleaned = content.to_string();
    for violation in violations {
        if violation.severity.is_redacted() && !violation.matched.is_empty() {
            cleaned = cleaned.replace(&violation.matched, REDACTION_MARKER);
        }
    }
    cleaned.trim().to_string()
}

fn collect_suggestions(violations: &[Violation]) -> Vec<String> {
    let mut suggestions = Vec::new();
    for suggestion in violations.iter().filter_map(|v| v.suggestion.as_deref()) {
        push_unique(&mut suggestions, suggestion);
    }

    if violations.iter().any(|v| v.violation_type.is_contact_detail()) {
        push_unique(&mut suggestions, CONTACT_ADVISORY);
    }
    if violations
        .iter()
        .any(|v| v.violation_type.is_offensive_language())
    {
        push_unique(&mut suggestions, LANGUAGE_ADVISORY);
    }
    suggestions
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|s| s == item) {
        list.push(item.to_string());
    }
}
