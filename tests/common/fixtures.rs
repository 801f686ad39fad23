//! Test fixtures and factories
//!
//! Factories build real validators; audit sinks are in-memory.

use content_validator::{
    AuditSink, ContentValidator, MemoryAuditSink, ModerationRules, config::CacheConfig,
};
use std::sync::Arc;

/// Factory for validators under test
pub struct ValidatorFactory;

impl ValidatorFactory {
    /// Validator with built-in rules and no audit trail
    pub fn create() -> ContentValidator {
        ContentValidator::new().expect("default validator")
    }

    /// Validator writing audit records to the returned sink
    pub fn with_memory_audit() -> (ContentValidator, Arc<MemoryAuditSink>) {
        let sink = Arc::new(MemoryAuditSink::new());
        let validator = ContentValidator::builder()
            .audit_sink(sink.clone() as Arc<dyn AuditSink>)
            .build()
            .expect("validator with memory audit");
        (validator, sink)
    }

    /// Validator with a custom rule set and caching disabled
    pub fn with_rules(rules: ModerationRules) -> ContentValidator {
        ContentValidator::builder()
            .rules(Arc::new(rules))
            .cache_config(CacheConfig {
                enabled: false,
                ..CacheConfig::default()
            })
            .build()
            .expect("validator with custom rules")
    }
}

/// Sample submissions
pub struct ContentFixtures;

impl ContentFixtures {
    /// Ordinary job post
    pub fn clean_job() -> &'static str {
        "Looking for a plumber in Bangalore, budget 2000 INR"
    }

    /// Comment leaking a phone number
    pub fn phone_comment() -> &'static str {
        "Call me at 9876543210"
    }

    /// Shouted, repeated comment
    pub fn shouted_comment() -> &'static str {
        "URGENT URGENT URGENT CALL NOW CALL NOW CALL NOW"
    }

    /// Job post with a disguised email address
    pub fn disguised_email() -> &'static str {
        "my email is john at gmail dot com"
    }

    /// Harmless text of exactly `len` characters
    pub fn long_clean_text(len: usize) -> String {
        let mut text = String::new();
        let mut i = 0;
        while text.len() < len {
            text.push_str(&format!("note{i} "));
            i += 1;
        }
        text.truncate(len);
        text
    }
}
