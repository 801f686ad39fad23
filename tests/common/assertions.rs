//! Custom test assertions
//!
//! Domain-specific assertions on validation verdicts.

use content_validator::{Severity, ValidationResult, ViolationType};

/// Assertions for ValidationResult
pub trait VerdictAssertions {
    /// Assert the verdict accepts the content with no violations
    fn assert_clean(&self);

    /// Assert at least one violation of `violation_type` with `severity`
    fn assert_violation(&self, violation_type: ViolationType, severity: Severity);

    /// Assert `is_valid` agrees with the score
    fn assert_consistent(&self);
}

impl VerdictAssertions for ValidationResult {
    fn assert_clean(&self) {
        assert!(
            self.violations.is_empty(),
            "Expected no violations, got {:?}",
            self.violations
        );
        assert!(self.is_valid);
        assert_eq!(self.score, 0);
    }

    fn assert_violation(&self, violation_type: ViolationType, severity: Severity) {
        assert!(
            self.violations_of(violation_type)
                .any(|v| v.severity == severity),
            "Expected a {:?} violation with severity {:?}, got {:?}",
            violation_type,
            severity,
            self.violations
        );
    }

    fn assert_consistent(&self) {
        let score: u32 = self.violations.iter().map(|v| v.severity.weight()).sum();
        assert_eq!(self.score, score, "score must equal the sum of severities");
        assert_eq!(self.is_valid, self.score < 10);
    }
}
