//! Error handling for the validator
//!
//! Errors only surface from construction, configuration and storage APIs.
//! Content that fails moderation is a normal `ValidationResult`, not an error.

#![allow(missing_docs)]

use thiserror::Error;

/// Result type alias for the validator
pub type Result<T> = std::result::Result<T, ValidatorError>;

/// Main error type for the validator
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Redis errors
    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Audit trail errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Rule compilation errors
    #[error("Pattern error in rule '{rule}': {message}")]
    Pattern { rule: String, message: String },
}

impl ValidatorError {
    /// Build a pattern error from a regex compilation failure
    pub fn pattern(rule: impl Into<String>, err: &regex::Error) -> Self {
        Self::Pattern {
            rule: rule.into(),
            message: err.to_string(),
        }
    }

    /// Whether retrying the same operation could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            #[cfg(feature = "redis")]
            ValidatorError::Redis(e) => e.is_io_error() || e.is_timeout() || e.is_connection_dropped(),
            ValidatorError::Io(_) | ValidatorError::Audit(_) => true,
            _ => false,
        }
    }
}
