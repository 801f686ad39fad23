//! Content moderation
//!
//! Four scanning passes over user-submitted text (sensitive information,
//! profanity, spam, context rules), scored and redacted into a
//! [`ValidationResult`].

pub mod patterns;
pub mod profanity;
pub mod rules;
pub mod scanner;
pub mod spam;
pub mod types;
pub mod validator;

pub use patterns::ContentRule;
pub use profanity::ProfanityFilter;
pub use rules::ModerationRules;
pub use types::{
    ContentContext, REDACTION_MARKER, REJECTION_THRESHOLD, Severity, SkillViolation,
    ValidationResult, Violation, ViolationType,
};
pub use validator::{ContentValidator, ContentValidatorBuilder};
