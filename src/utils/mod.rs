//! Utility modules for the validator
//!
//! - **error**: Error type and `Result` alias
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use logging::init_tracing;
