//! # content-validator
//!
//! Rule-based moderation for user-submitted marketplace text.
//!
//! ## Features
//!
//! - **Contact-leak detection**: phone numbers, email addresses (plain and
//!   disguised), messaging apps, social handles, map links and URLs
//! - **Multilingual profanity**: English, Hindi and other Indian languages in
//!   Latin and native scripts, plus common obfuscated spellings
//! - **Spam scoring**: promotional and scheme keywords, repeated text, shouting
//! - **Context rules**: contact requests in public posts, over-long comments
//! - **Redaction**: high and critical matches replaced with `[REDACTED]`
//! - **Verdict cache**: bounded LRU with TTL keyed on a SHA-256 fingerprint
//! - **Audit trail**: flagged submissions written to Redis with an expiry
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use content_validator::{ContentContext, ContentValidator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let validator = ContentValidator::new()?;
//!
//!     let result = validator
//!         .validate_content("Call me at 9876543210", &ContentContext::Comment, Some("user-42"))
//!         .await;
//!
//!     if !result.is_valid {
//!         println!("Rejected (score {}): {}", result.score, result.cleaned_content);
//!         for suggestion in &result.suggestions {
//!             println!("  - {}", suggestion);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## From configuration
//!
//! ```rust,no_run
//! use content_validator::{Config, ContentValidator, init_tracing};
//!
//! # async fn run() -> content_validator::Result<()> {
//! let config = Config::from_file("config/validator.yaml").await?;
//! init_tracing(config.logging())?;
//! let validator = ContentValidator::from_config(&config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{Result, ValidatorError};
pub use utils::logging::init_tracing;

// Export the moderation API
pub use crate::core::audit::{AuditRecord, AuditSink, MemoryAuditSink, NoopAuditSink};
#[cfg(feature = "redis")]
pub use crate::core::audit::RedisAuditSink;
pub use crate::core::cache_manager::{CacheStats, ValidationCache};
pub use crate::core::moderation::{
    ContentContext, ContentValidator, ContentValidatorBuilder, ModerationRules,
    REDACTION_MARKER, REJECTION_THRESHOLD, Severity, SkillViolation, ValidationResult, Violation,
    ViolationType,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
