//! Tests for configuration validation

#[cfg(test)]
mod tests {
    use super::super::trait_def::Validate;
    use crate::config::models::*;
    use crate::core::moderation::types::{Severity, ViolationType};

    fn custom_pattern(name: &str, pattern: &str) -> CustomPatternConfig {
        CustomPatternConfig {
            name: name.to_string(),
            pattern: pattern.to_string(),
            violation_type: ViolationType::ExternalLink,
            severity: Severity::High,
            message: "Payment handles are not allowed".to_string(),
            suggestion: None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ValidatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_cache_config_validation() {
        let mut config = CacheConfig::default();
        assert!(config.validate().is_ok());

        config.ttl_seconds = MAX_CACHE_TTL_SECONDS;
        assert!(config.validate().is_ok());

        config.ttl_seconds = u64::MAX;
        assert!(config.validate().is_err());

        config.ttl_seconds = 60;
        config.max_entries = 0;
        assert!(config.validate().is_err());

        config.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_audit_config_validation() {
        let mut config = AuditConfig::default();
        assert!(config.validate().is_ok());

        config.ttl_seconds = 0;
        assert!(config.validate().is_err());

        config.ttl_seconds = 60;
        config.key_prefix = "content violations".to_string();
        assert!(config.validate().is_err());

        config.key_prefix = String::new();
        assert!(config.validate().is_err());

        config.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_redis_config_validation() {
        let mut config = RedisConfig {
            enabled: true,
            ..RedisConfig::default()
        };
        assert!(config.validate().is_ok());

        config.url = "http://localhost:6379".to_string();
        assert!(config.validate().is_err());

        config.url = "rediss://secure-host:6380".to_string();
        assert!(config.validate().is_ok());

        config.connection_timeout = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.level = "content_validator=debug,warn".to_string();
        assert!(config.validate().is_ok());

        config.level = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rules_config_validation() {
        let mut config = RulesConfig::default();
        assert!(config.validate().is_ok());

        config.extra_profanity.push(" ".to_string());
        assert!(config.validate().is_err());

        config.extra_profanity.clear();
        config.custom_patterns.push(custom_pattern("upi", r"\b\w+@ybl\b"));
        assert!(config.validate().is_ok());

        // Bad regex passes validation; the rule set drops it later
        config.custom_patterns.push(custom_pattern("broken", "(unclosed"));
        assert!(config.validate().is_ok());

        config.custom_patterns.push(custom_pattern("", r"\d+"));
        assert!(config.validate().is_err());
    }
}
