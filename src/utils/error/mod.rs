//! Error handling utilities
//!
//! This module defines the crate-wide error type and result alias.

pub mod error;

pub use error::*;
