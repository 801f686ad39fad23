//! Spam and promotional content detection

use super::patterns::ContentRule;
use super::types::{Severity, Violation, ViolationType};

/// Content longer than this (in characters) is checked for shouting
pub const CAPS_MIN_LENGTH: usize = 20;

/// Uppercase share above which content counts as shouting
pub const CAPS_RATIO_LIMIT: f64 = 0.7;

/// Shortest unit the repetition detector looks for
pub const MIN_REPEAT_UNIT: usize = 3;

/// Low-severity promotional phrases
pub const PROMOTIONAL_KEYWORDS: &[&str] = &[
    "free",
    "discount",
    "offer",
    "special offer",
    "limited time",
    "act now",
    "buy now",
    "click here",
    "best price",
    "lowest price",
    "cheapest",
    "cashback",
    "deal of the day",
    "hurry up",
    "100% guaranteed",
];

/// High-severity monetisation and scheme phrases
pub const SCHEME_KEYWORDS: &[&str] = &[
    "work from home",
    "get rich",
    "get rich quick",
    "mlm",
    "multi-level marketing",
    "multi level marketing",
    "pyramid scheme",
    "network marketing",
    "easy money",
    "earn money fast",
    "double your money",
    "investment opportunity",
    "guaranteed returns",
    "lottery",
    "you have won",
];

pub(crate) const PROMOTIONAL_MESSAGE: &str = "Promotional language is not allowed";
pub(crate) const PROMOTIONAL_SUGGESTION: &str = "Describe the work itself rather than promoting offers";
pub(crate) const SCHEME_MESSAGE: &str = "Money-making schemes and MLM promotions are not allowed";
pub(crate) const SCHEME_SUGGESTION: &str =
    "Only post genuine local service jobs; schemes and referral offers are removed";

const REPETITION_MESSAGE: &str = "Repetitive content detected";
const REPETITION_SUGGESTION: &str = "Avoid repeating the same words or characters";
const CAPS_MESSAGE: &str = "Excessive use of capital letters";
const CAPS_SUGGESTION: &str = "Avoid writing in all capital letters";

/// Build keyword rules for the promotional table plus extras
pub fn promotional_rules<'a>(
    extra: impl IntoIterator<Item = &'a str>,
    skipped: &mut Vec<String>,
) -> Vec<ContentRule> {
    keyword_rules(
        PROMOTIONAL_KEYWORDS.iter().copied().chain(extra),
        ViolationType::Promotional,
        Severity::Low,
        PROMOTIONAL_MESSAGE,
        PROMOTIONAL_SUGGESTION,
        skipped,
    )
}

/// Build keyword rules for the scheme table plus extras
pub fn scheme_rules<'a>(
    extra: impl IntoIterator<Item = &'a str>,
    skipped: &mut Vec<String>,
) -> Vec<ContentRule> {
    keyword_rules(
        SCHEME_KEYWORDS.iter().copied().chain(extra),
        ViolationType::Spam,
        Severity::High,
        SCHEME_MESSAGE,
        SCHEME_SUGGESTION,
        skipped,
    )
}

fn keyword_rules<'a>(
    keywords: impl IntoIterator<Item = &'a str>,
    violation_type: ViolationType,
    severity: Severity,
    message: &str,
    suggestion: &str,
    skipped: &mut Vec<String>,
) -> Vec<ContentRule> {
    let mut rules: Vec<ContentRule> = Vec::new();
    for keyword in keywords {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() || rules.iter().any(|r| r.name == keyword) {
            continue;
        }
        match ContentRule::keyword(
            &keyword,
            violation_type,
            severity,
            message,
            Some(suggestion.to_string()),
        ) {
            Ok(rule) => rules.push(rule),
            Err(e) => {
                tracing::error!("Skipping keyword rule: {}", e);
                skipped.push(keyword);
            }
        }
    }
    rules
}

/// Find runs where a unit of at least three characters is immediately
/// repeated two or more extra times.
///
/// Matches what `(.{3,})\1{2,}` finds with a global scan: leftmost start,
/// longest unit first, as many repeats as fit, non-overlapping, and never
/// spanning a line break. Returns `(char_start, byte_start, byte_end)`.
pub fn find_repetitions(text: &str) -> Vec<(usize, usize, usize)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let n = chars.len();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);

    // line_ends[k]: index of the first line terminator at or after k, or n
    let mut line_ends = vec![n; n + 1];
    for k in (0..n).rev() {
        line_ends[k] = if is_line_terminator(chars[k].1) {
            k
        } else {
            line_ends[k + 1]
        };
    }

    let mut found = Vec::new();
    let mut i = 0;
    while i + MIN_REPEAT_UNIT * 3 <= n {
        let line_end = line_ends[i];
        let max_unit = (line_end - i) / 3;

        let hit = (MIN_REPEAT_UNIT..=max_unit)
            .rev()
            .find(|&unit| repeats_at(&chars, i, unit, 2));

        match hit {
            Some(unit) => {
                let mut copies = 3;
                while i + (copies + 1) * unit <= line_end && repeats_at(&chars, i, unit, copies) {
                    copies += 1;
                }
                let end = i + copies * unit;
                found.push((i, byte_at(i), byte_at(end)));
                i = end;
            }
            None => i += 1,
        }
    }
    found
}

/// Whether copy number `copy` (1-based, after the original) and every copy
/// before it equal the unit starting at `start`.
fn repeats_at(chars: &[(usize, char)], start: usize, unit: usize, copy: usize) -> bool {
    let end = start + (copy + 1) * unit;
    if end > chars.len() {
        return false;
    }
    // Cheap probe on the first character of each copy before a full compare
    if (1..=copy).any(|k| chars[start + k * unit].1 != chars[start].1) {
        return false;
    }
    (unit..end - start).all(|off| chars[start + off].1 == chars[start + off % unit].1)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Append one `repetitive` violation per repeated run
pub fn scan_repetition(text: &str, out: &mut Vec<Violation>) {
    for (position, start, end) in find_repetitions(text) {
        out.push(Violation {
            violation_type: ViolationType::Repetitive,
            severity: Severity::Medium,
            message: REPETITION_MESSAGE.to_string(),
            matched: text[start..end].to_string(),
            position,
            suggestion: Some(REPETITION_SUGGESTION.to_string()),
        });
    }
}

/// Share of uppercase characters among all characters
pub fn caps_ratio(text: &str) -> f64 {
    let (upper, total) = text.chars().fold((0usize, 0usize), |(upper, total), c| {
        (upper + usize::from(c.is_uppercase()), total + 1)
    });
    if total == 0 {
        0.0
    } else {
        upper as f64 / total as f64
    }
}

/// Append a single `spam` violation when the whole text is shouted
pub fn scan_caps(text: &str, out: &mut Vec<Violation>) {
    if text.chars().count() > CAPS_MIN_LENGTH && caps_ratio(text) > CAPS_RATIO_LIMIT {
        out.push(Violation {
            violation_type: ViolationType::Spam,
            severity: Severity::Medium,
            message: CAPS_MESSAGE.to_string(),
            matched: text.to_string(),
            position: 0,
            suggestion: Some(CAPS_SUGGESTION.to_string()),
        });
    }
}
