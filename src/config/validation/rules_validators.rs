//! Rule override validators

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for RulesConfig {
    fn validate(&self) -> Result<(), String> {
        for word in self
            .extra_profanity
            .iter()
            .chain(&self.extra_promotional)
            .chain(&self.extra_scheme_keywords)
        {
            if word.trim().is_empty() {
                return Err("Rule keywords cannot be empty".to_string());
            }
        }

        for pattern in &self.custom_patterns {
            pattern.validate()?;
        }

        Ok(())
    }
}

impl Validate for CustomPatternConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Custom pattern name cannot be empty".to_string());
        }

        if self.pattern.is_empty() {
            return Err(format!("Custom pattern '{}' has an empty regex", self.name));
        }

        if self.message.trim().is_empty() {
            return Err(format!("Custom pattern '{}' needs a message", self.name));
        }

        // Malformed regexes are tolerated here: the rule set drops them at
        // compile time and keeps scanning with the remaining rules.
        Ok(())
    }
}
