//! Behavioural property tests
//!
//! Caching, thresholds, redaction and context gating seen from outside.

#[cfg(test)]
mod tests {
    use crate::common::{ContentFixtures, ValidatorFactory, VerdictAssertions};
    use content_validator::{
        ContentContext, ModerationRules, REDACTION_MARKER, Severity, ValidationResult, Violation,
        ViolationType, config::RulesConfig,
    };
    use std::sync::Arc;

    fn spam(severity: Severity) -> Violation {
        Violation {
            violation_type: ViolationType::Spam,
            severity,
            message: "spam".to_string(),
            matched: "spam".to_string(),
            position: 0,
            suggestion: None,
        }
    }

    #[tokio::test]
    async fn test_repeated_calls_share_one_verdict() {
        let validator = ValidatorFactory::create();
        let context = ContentContext::Comment;

        let first = validator
            .validate_content(ContentFixtures::phone_comment(), &context, None)
            .await;
        let second = validator
            .validate_content(ContentFixtures::phone_comment(), &context, Some("someone"))
            .await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(validator.cache_stats().unwrap().hits, 1);
    }

    #[tokio::test]
    async fn test_cache_can_be_cleared() {
        let validator = ValidatorFactory::create();
        let context = ContentContext::Review;

        let first = validator.validate_content("nice job", &context, None).await;
        validator.clear_cache();
        let second = validator.validate_content("nice job", &context, None).await;

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_threshold_is_exclusive_at_ten() {
        let nine = ValidationResult::from_violations(
            "spam",
            vec![spam(Severity::High), spam(Severity::High), spam(Severity::High)],
        );
        assert_eq!(nine.score, 9);
        assert!(nine.is_valid);

        let ten = ValidationResult::from_violations(
            "spam",
            vec![
                spam(Severity::High),
                spam(Severity::High),
                spam(Severity::High),
                spam(Severity::Low),
            ],
        );
        assert_eq!(ten.score, 10);
        assert!(!ten.is_valid);
        assert_eq!(ten.cleaned_content, REDACTION_MARKER);
    }

    #[tokio::test]
    async fn test_private_messages_come_back_untouched() {
        let validator = ValidatorFactory::create();
        let content = "  ping me on whatsapp 9876543210, you idiot  ";

        let result = validator
            .validate_content(content, &ContentContext::PrivateMessage, Some("u1"))
            .await;

        result.assert_clean();
        assert_eq!(result.cleaned_content, content);
        assert!(result.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_medium_matches_stay_in_cleaned_content() {
        let validator = ValidatorFactory::create();
        let result = validator
            .validate_content(
                "Follow @ravi_fixes on Instagram for photos",
                &ContentContext::JobApplication,
                None,
            )
            .await;

        assert!(result.has_violation(ViolationType::SocialMedia));
        assert!(result.violations.iter().all(|v| v.severity == Severity::Medium));
        assert_eq!(
            result.cleaned_content,
            "Follow @ravi_fixes on Instagram for photos"
        );
    }

    #[tokio::test]
    async fn test_contact_requests_only_flagged_in_public_contexts() {
        let validator = ValidatorFactory::create();
        let content = "DM me and send your number";

        for context in ["comment", "job_description", "review"] {
            let result = validator
                .validate_content(content, &ContentContext::from(context), None)
                .await;
            assert_eq!(result.violations_of(ViolationType::SocialMedia).count(), 2);
        }
        for context in ["job_application", "profile", "chat_room"] {
            let result = validator
                .validate_content(content, &ContentContext::from(context), None)
                .await;
            result.assert_clean();
        }
    }

    #[tokio::test]
    async fn test_every_verdict_is_consistent() {
        let validator = ValidatorFactory::create();
        let samples = [
            ContentFixtures::clean_job(),
            ContentFixtures::phone_comment(),
            ContentFixtures::shouted_comment(),
            ContentFixtures::disguised_email(),
            "FREE consultation!!! Work from home, double your money at www.get-rich.biz",
            "mail me: ravi.k@example.co.in or +91 98765 43210",
        ];

        for sample in samples {
            for context in [ContentContext::Comment, ContentContext::Profile] {
                validator
                    .validate_content(sample, &context, None)
                    .await
                    .assert_consistent();
            }
        }
    }

    #[tokio::test]
    async fn test_operator_words_extend_the_dictionary() {
        let config = RulesConfig {
            extra_profanity: vec!["nincompoop".to_string()],
            ..RulesConfig::default()
        };
        let validator = ValidatorFactory::with_rules(ModerationRules::from_config(&config));

        let result = validator
            .validate_content("what a Nincompoop", &ContentContext::Comment, None)
            .await;
        result.assert_violation(ViolationType::Abuse, Severity::Critical);
        assert_eq!(result.cleaned_content, "what a [REDACTED]");
    }
}
