//! Integration tests for content-validator
//!
//! These tests drive the public API and check observable behaviour.

pub mod audit_tests;
pub mod config_tests;
pub mod property_tests;
pub mod scenario_tests;
