//! Top-level configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for ValidatorConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating validator configuration");

        self.cache.validate()?;
        self.audit.validate()?;
        self.redis.validate()?;
        self.rules.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level directive '{}': {}", self.level, e))?;

        Ok(())
    }
}
