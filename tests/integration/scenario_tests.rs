//! Marketplace scenario tests
//!
//! One test per typical submission a marketplace sees.

#[cfg(test)]
mod tests {
    use crate::common::{ContentFixtures, ValidatorFactory, VerdictAssertions};
    use content_validator::{ContentContext, Severity, ViolationType};

    #[tokio::test]
    async fn test_phone_number_in_comment_is_rejected() {
        let validator = ValidatorFactory::create();
        let result = validator
            .validate_content(ContentFixtures::phone_comment(), &ContentContext::Comment, None)
            .await;

        result.assert_violation(ViolationType::PhoneNumber, Severity::Critical);
        result.assert_consistent();
        assert!(!result.is_valid);
        assert!(!result.cleaned_content.contains("9876543210"));
    }

    #[tokio::test]
    async fn test_clean_job_description_passes() {
        let validator = ValidatorFactory::create();
        let result = validator
            .validate_content(ContentFixtures::clean_job(), &ContentContext::JobDescription, None)
            .await;

        result.assert_clean();
        assert_eq!(result.cleaned_content, ContentFixtures::clean_job().trim());
    }

    #[tokio::test]
    async fn test_shouted_repetition_is_flagged_twice() {
        let validator = ValidatorFactory::create();
        let result = validator
            .validate_content(ContentFixtures::shouted_comment(), &ContentContext::Comment, None)
            .await;

        result.assert_violation(ViolationType::Repetitive, Severity::Medium);
        result.assert_violation(ViolationType::Spam, Severity::Medium);
        result.assert_consistent();
    }

    #[tokio::test]
    async fn test_disguised_email_in_job_description() {
        let validator = ValidatorFactory::create();
        let result = validator
            .validate_content(
                ContentFixtures::disguised_email(),
                &ContentContext::JobDescription,
                None,
            )
            .await;

        assert_eq!(result.violations.len(), 1);
        result.assert_violation(ViolationType::EmailAddress, Severity::High);
        assert!(result.is_valid);
    }

    #[tokio::test]
    async fn test_overlong_comment_gets_one_length_violation() {
        let validator = ValidatorFactory::create();
        let content = ContentFixtures::long_clean_text(1200);
        let result = validator
            .validate_content(&content, &ContentContext::Comment, None)
            .await;

        assert_eq!(result.violations.len(), 1);
        result.assert_violation(ViolationType::Spam, Severity::Low);
        assert_eq!(result.score, 1);
    }

    #[tokio::test]
    async fn test_review_with_link_and_abuse() {
        let validator = ValidatorFactory::create();
        let result = validator
            .validate_content(
                "Worst work ever, this bastard overcharged. Details at https://example.com/rant",
                &ContentContext::Review,
                None,
            )
            .await;

        result.assert_violation(ViolationType::Abuse, Severity::Critical);
        result.assert_violation(ViolationType::ExternalLink, Severity::High);
        assert_eq!(
            result.cleaned_content,
            "Worst work ever, this [REDACTED] overcharged. Details at [REDACTED]"
        );
        assert!(result.is_valid);
    }

    #[tokio::test]
    async fn test_devanagari_abuse_with_positions_in_characters() {
        let validator = ValidatorFactory::create();
        let content = "काम ठीक था पर वो हरामी है";
        let result = validator
            .validate_content(content, &ContentContext::Review, None)
            .await;

        let abuse: Vec<_> = result.violations_of(ViolationType::Abuse).collect();
        assert_eq!(abuse.len(), 1);
        assert_eq!(abuse[0].matched, "हरामी");
        let expected = content
            .char_indices()
            .position(|(i, _)| content[i..].starts_with("हरामी"))
            .unwrap();
        assert_eq!(abuse[0].position, expected);
    }

    #[tokio::test]
    async fn test_skills_report_only_failures() {
        let validator = ValidatorFactory::create();
        let skills = ["Carpentry", "whatsapp 9876543210 for fuck sake", "Painting"];

        let failing = validator.validate_skills(&skills, None).await;
        assert_eq!(failing.len(), 1);
        assert_eq!(failing[0].skill, skills[1]);
        assert!(!failing[0].result.is_valid);
    }
}
