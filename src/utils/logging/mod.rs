//! Logging utilities
//!
//! Installs the `tracing` subscriber used by applications embedding the
//! validator.

use crate::config::LoggingConfig;
use crate::utils::error::{Result, ValidatorError};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber from configuration.
///
/// `RUST_LOG` overrides the configured level. Calling this again once a
/// subscriber is installed is a no-op.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ValidatorError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(())
}
