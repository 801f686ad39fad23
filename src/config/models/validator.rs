//! Main validator configuration

#![allow(missing_docs)]

use super::*;
use crate::utils::error::{Result, ValidatorError};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "CONTENT_VALIDATOR_";

/// Main validator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Result cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Audit trail configuration
    #[serde(default)]
    pub audit: AuditConfig,
    /// Redis configuration for the audit store
    #[serde(default)]
    pub redis: RedisConfig,
    /// Rule table overrides
    #[serde(default)]
    pub rules: RulesConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ValidatorConfig {
    /// Build a configuration from defaults overlaid with `CONTENT_VALIDATOR_*` variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = env_var("CACHE_ENABLED") {
            config.cache.enabled = parse_bool("CACHE_ENABLED", &v)?;
        }
        if let Some(v) = env_var("CACHE_MAX_ENTRIES") {
            config.cache.max_entries = parse_num("CACHE_MAX_ENTRIES", &v)?;
        }
        if let Some(v) = env_var("CACHE_TTL_SECONDS") {
            config.cache.ttl_seconds = parse_num("CACHE_TTL_SECONDS", &v)?;
        }
        if let Some(v) = env_var("AUDIT_ENABLED") {
            config.audit.enabled = parse_bool("AUDIT_ENABLED", &v)?;
        }
        if let Some(v) = env_var("AUDIT_TTL_SECONDS") {
            config.audit.ttl_seconds = parse_num("AUDIT_TTL_SECONDS", &v)?;
        }
        if let Some(v) = env_var("REDIS_URL") {
            config.redis.url = v;
            config.redis.enabled = true;
        }
        if let Some(v) = env_var("REDIS_ENABLED") {
            config.redis.enabled = parse_bool("REDIS_ENABLED", &v)?;
        }
        if let Some(v) = env_var("LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Some(v) = env_var("LOG_JSON") {
            config.logging.json = parse_bool("LOG_JSON", &v)?;
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.cache = self.cache.merge(other.cache);
        self.audit = self.audit.merge(other.audit);
        self.redis = self.redis.merge(other.redis);
        self.rules = self.rules.merge(other.rules);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}{name}"))
        .ok()
        .filter(|v| !v.trim().is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ValidatorError::Config(format!(
            "{ENV_PREFIX}{name} must be a boolean, got '{other}'"
        ))),
    }
}

fn parse_num<T: std::str::FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| {
        ValidatorError::Config(format!("{ENV_PREFIX}{name} is not a valid number: {e}"))
    })
}
