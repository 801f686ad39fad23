//! Configuration management for the validator
//!
//! This module handles loading, validation, and management of validator configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, ValidatorError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the validator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Validator configuration
    pub validator: ValidatorConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ValidatorError::Config(format!("Failed to read config file: {}", e)))?;

        let validator: ValidatorConfig = serde_yaml::from_str(&content)
            .map_err(|e| ValidatorError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { validator };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let validator = ValidatorConfig::from_env()?;
        let config = Self { validator };

        config.validate()?;
        Ok(config)
    }

    /// Get result cache configuration
    pub fn cache(&self) -> &CacheConfig {
        &self.validator.cache
    }

    /// Get audit trail configuration
    pub fn audit(&self) -> &AuditConfig {
        &self.validator.audit
    }

    /// Get Redis configuration
    pub fn redis(&self) -> &RedisConfig {
        &self.validator.redis
    }

    /// Get rule overrides
    pub fn rules(&self) -> &RulesConfig {
        &self.validator.rules
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.validator.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.validator
            .cache
            .validate()
            .map_err(|e| ValidatorError::Config(format!("Cache config error: {}", e)))?;

        self.validator
            .audit
            .validate()
            .map_err(|e| ValidatorError::Config(format!("Audit config error: {}", e)))?;

        self.validator
            .redis
            .validate()
            .map_err(|e| ValidatorError::Config(format!("Redis config error: {}", e)))?;

        self.validator
            .rules
            .validate()
            .map_err(|e| ValidatorError::Config(format!("Rules config error: {}", e)))?;

        self.validator
            .logging
            .validate()
            .map_err(|e| ValidatorError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.validator = self.validator.merge(other.validator);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.validator).map_err(|e| {
            ValidatorError::Config(format!("Failed to serialize config to JSON: {}", e))
        })
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.validator).map_err(|e| {
            ValidatorError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
