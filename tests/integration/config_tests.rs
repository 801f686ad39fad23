//! Configuration integration tests
//!
//! Loading YAML files and wiring a validator from them.

#[cfg(test)]
mod tests {
    use content_validator::config::Validate;
    use content_validator::{Config, ContentContext, ContentValidator, ValidatorError, ViolationType};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_validator_from_yaml_rules() {
        let file = write_config(
            r#"
cache:
  max_entries: 128
  ttl_seconds: 60
rules:
  extra_scheme_keywords:
    - "crypto signals"
  custom_patterns:
    - name: "upi_handle"
      pattern: '\b[a-z0-9.]+@(?:ybl|okaxis|oksbi)\b'
      violation_type: "external_link"
      severity: 3
      message: "Payment handles are not allowed"
      suggestion: "Collect payment through the app"
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        let validator = ContentValidator::from_config(&config).await.unwrap();

        let result = validator
            .validate_content(
                "Join my crypto signals group, pay to ravi@okaxis",
                &ContentContext::Comment,
                None,
            )
            .await;

        assert!(result.has_violation(ViolationType::Spam));
        assert!(result.has_violation(ViolationType::ExternalLink));
        assert!(result.cleaned_content.contains("[REDACTED]"));
        assert!(
            result
                .suggestions
                .contains(&"Collect payment through the app".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_custom_pattern_is_skipped() {
        let file = write_config(
            r#"
rules:
  custom_patterns:
    - name: "broken"
      pattern: "(unclosed"
      violation_type: "spam"
      severity: 1
      message: "never reported"
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        let validator = ContentValidator::from_config(&config).await.unwrap();

        assert_eq!(validator.rules().skipped_rules().to_vec(), vec!["broken".to_string()]);
        let result = validator
            .validate_content("Call me at 9876543210", &ContentContext::Comment, None)
            .await;
        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn test_invalid_severity_is_rejected() {
        let file = write_config(
            r#"
rules:
  custom_patterns:
    - name: "too_severe"
      pattern: "x"
      violation_type: "spam"
      severity: 9
      message: "nope"
"#,
        );

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, ValidatorError::Config(_)));
    }

    #[tokio::test]
    async fn test_unreachable_redis_falls_back_to_dropping_records() {
        let file = write_config(
            r#"
redis:
  url: "redis://127.0.0.1:1"
  enabled: true
  connection_timeout: 1
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        let validator = ContentValidator::from_config(&config).await.unwrap();

        let result = validator
            .validate_content("Call me at 9876543210", &ContentContext::Comment, Some("u1"))
            .await;
        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn test_disabled_cache_from_config() {
        let file = write_config("cache:\n  enabled: false\n");

        let config = Config::from_file(file.path()).await.unwrap();
        let validator = ContentValidator::from_config(&config).await.unwrap();
        assert!(validator.cache_stats().is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.validator.validate().is_ok());
        assert_eq!(config.cache().max_entries, 10_000);
        assert_eq!(config.audit().ttl_seconds, 2_592_000);
    }
}
