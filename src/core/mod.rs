//! Core functionality for the validator
//!
//! This module contains the moderation engine and the services it leans on.

pub mod audit;
pub mod cache_manager;
pub mod moderation;
