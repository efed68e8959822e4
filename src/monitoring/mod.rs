//! Monitoring and observability
//!
//! The purge service's only durable observability surface is the audit
//! trail: an append-only text log written for every count query and every
//! completed batch.

pub mod audit;

pub use audit::{AuditSink, FileAuditSink, MemoryAuditSink};
