//! Audit trail integration tests

#[cfg(test)]
mod tests {
    use crate::common::{ContentFixtures, ValidatorFactory};
    use content_validator::{AuditSink, ContentContext, ContentValidator, MemoryAuditSink, Severity, config::AuditConfig};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_flagged_content_is_audited_per_call() {
        let (validator, sink) = ValidatorFactory::with_memory_audit();

        for _ in 0..3 {
            validator
                .validate_content(ContentFixtures::phone_comment(), &ContentContext::Comment, Some("u-7"))
                .await;
        }

        let records = sink.records_for("u-7");
        assert_eq!(records.len(), 3);
        let record = &records[0];
        assert_eq!(record.user_id, "u-7");
        assert_eq!(record.context, "comment");
        assert_eq!(record.content, ContentFixtures::phone_comment());
        assert_eq!(record.score, 14);
        assert_eq!(record.violations[0].severity, Severity::Critical);
        assert_eq!(
            record.key("content_violations"),
            format!("content_violations:u-7:{}", record.timestamp.timestamp_millis())
        );
    }

    #[tokio::test]
    async fn test_clean_or_anonymous_content_is_not_audited() {
        let (validator, sink) = ValidatorFactory::with_memory_audit();

        validator
            .validate_content(ContentFixtures::clean_job(), &ContentContext::JobDescription, Some("u-1"))
            .await;
        validator
            .validate_content(ContentFixtures::phone_comment(), &ContentContext::Comment, None)
            .await;

        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_audit_preview_is_truncated() {
        let sink = Arc::new(MemoryAuditSink::new());
        let validator = ContentValidator::builder()
            .audit_sink(sink.clone() as Arc<dyn AuditSink>)
            .audit_config(AuditConfig {
                content_preview_chars: 10,
                ..AuditConfig::default()
            })
            .build()
            .unwrap();

        let content = format!("{} and more", ContentFixtures::long_clean_text(1200));
        validator
            .validate_content(&content, &ContentContext::Comment, Some("u-2"))
            .await;

        let records = sink.records_for("u-2");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "note0 note");
    }
}
