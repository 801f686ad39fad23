//! Violation audit trail
//!
//! Records of rejected or flagged submissions, written through an
//! [`AuditSink`] so storage can be swapped or mocked.

pub mod sink;
pub mod types;

pub use sink::{AuditSink, MemoryAuditSink, NoopAuditSink};
#[cfg(feature = "redis")]
pub use sink::RedisAuditSink;
pub use types::{AuditRecord, AuditViolation};
