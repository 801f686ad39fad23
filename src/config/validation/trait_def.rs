//! Validation trait definition
//!
//! This module defines the core Validate trait used by all configuration structures.

/// Validation trait for configuration structures
pub trait Validate {
    /// Check the values, returning a description of the first problem
    fn validate(&self) -> Result<(), String>;
}
