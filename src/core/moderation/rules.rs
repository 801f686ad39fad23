//! Compiled moderation rule set

use super::patterns::{CONTACT_INTENT_RULES, ContentRule, SENSITIVE_INFO_RULES, compile_table};
use super::profanity::ProfanityFilter;
use super::spam::{promotional_rules, scheme_rules};
use crate::config::RulesConfig;
use tracing::{info, warn};

/// Every table the scanner consults, compiled once and shared read-only
#[derive(Debug, Clone)]
pub struct ModerationRules {
    sensitive_info: Vec<ContentRule>,
    profanity: ProfanityFilter,
    promotional: Vec<ContentRule>,
    schemes: Vec<ContentRule>,
    contact_intent: Vec<ContentRule>,
    skipped: Vec<String>,
}

impl Default for ModerationRules {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default())
    }
}

impl ModerationRules {
    /// Build the built-in tables plus operator overrides.
    ///
    /// Entries that fail to compile are logged and left out; the remaining
    /// rules keep working.
    pub fn from_config(config: &RulesConfig) -> Self {
        let mut skipped = Vec::new();

        let mut sensitive_info = compile_table(SENSITIVE_INFO_RULES, &mut skipped);
        for custom in &config.custom_patterns {
            match ContentRule::new(
                &custom.name,
                &custom.pattern,
                custom.violation_type,
                custom.severity,
                &custom.message,
                custom.suggestion.clone(),
            ) {
                Ok(rule) => sensitive_info.push(rule),
                Err(e) => {
                    warn!("Skipping custom pattern: {}", e);
                    skipped.push(custom.name.clone());
                }
            }
        }

        let mut profanity = ProfanityFilter::new();
        profanity.add_words(&config.extra_profanity);
        skipped.extend(profanity.skipped().iter().cloned());

        let promotional = promotional_rules(
            config.extra_promotional.iter().map(String::as_str),
            &mut skipped,
        );
        let schemes = scheme_rules(
            config.extra_scheme_keywords.iter().map(String::as_str),
            &mut skipped,
        );
        let contact_intent = compile_table(CONTACT_INTENT_RULES, &mut skipped);

        let rules = Self {
            sensitive_info,
            profanity,
            promotional,
            schemes,
            contact_intent,
            skipped,
        };
        info!(
            "Moderation rules ready: {} sensitive, {} dictionary, {} promotional, {} scheme, {} contact-intent, {} skipped",
            rules.sensitive_info.len(),
            rules.profanity.len(),
            rules.promotional.len(),
            rules.schemes.len(),
            rules.contact_intent.len(),
            rules.skipped.len()
        );
        rules
    }

    /// Sensitive-information rules in scan order
    pub fn sensitive_info(&self) -> &[ContentRule] {
        &self.sensitive_info
    }

    /// Abuse dictionary
    pub fn profanity(&self) -> &ProfanityFilter {
        &self.profanity
    }

    /// Promotional keyword rules
    pub fn promotional(&self) -> &[ContentRule] {
        &self.promotional
    }

    /// Scheme keyword rules
    pub fn schemes(&self) -> &[ContentRule] {
        &self.schemes
    }

    /// Contact-intent rules for public contexts
    pub fn contact_intent(&self) -> &[ContentRule] {
        &self.contact_intent
    }

    /// Names of rules and words dropped at build time
    pub fn skipped_rules(&self) -> &[String] {
        &self.skipped
    }
}
