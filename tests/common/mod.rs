//! Common test utilities for content-validator
//!
//! - Content fixtures and validator factories
//! - Verdict assertions

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::VerdictAssertions;
pub use fixtures::{ContentFixtures, ValidatorFactory};
