//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! - `trait_def`: Core Validate trait definition
//! - `validator_validators`: Top-level `ValidatorConfig` validation
//! - `storage_validators`: Cache, audit and Redis validators
//! - `rules_validators`: Rule override validators
//! - `tests`: Test suite for all validators

mod rules_validators;
mod storage_validators;
mod tests;
mod trait_def;
mod validator_validators;

pub use trait_def::Validate;
