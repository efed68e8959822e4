//! Common test utilities for orderpurge-rs
//!
//! Shared test infrastructure:
//! - `store`: an in-memory order store with failure injection
//! - `database`: an in-memory SQLite database helper with seeding

pub mod database;
pub mod store;

pub use database::TestDatabase;
pub use store::InMemoryOrderStore;

use orderpurge_rs::core::{BatchDriver, CascadeDelete, CountService, OrderStore};
use orderpurge_rs::monitoring::audit::MemoryAuditSink;
use orderpurge_rs::services::JobRunner;
use std::sync::Arc;
use std::time::Duration;

/// Type filter used by all tests
pub const TYPE_FILTER: &str = "shop_order";

/// Build a cascade-strategy driver over a store
pub fn driver(store: Arc<dyn OrderStore>, batch_size: u32) -> Arc<BatchDriver> {
    Arc::new(BatchDriver::new(
        store,
        Arc::new(CascadeDelete),
        Arc::new(MemoryAuditSink::default()),
        TYPE_FILTER.to_string(),
        batch_size,
    ))
}

/// Build a job runner with no pacing delay and the default stall threshold
pub fn runner(store: Arc<dyn OrderStore>, batch_size: u32) -> JobRunner {
    let audit = Arc::new(MemoryAuditSink::default());
    let driver = Arc::new(BatchDriver::new(
        store.clone(),
        Arc::new(CascadeDelete),
        audit.clone(),
        TYPE_FILTER.to_string(),
        batch_size,
    ));
    let counter = Arc::new(CountService::new(
        store,
        audit.clone(),
        TYPE_FILTER.to_string(),
    ));
    JobRunner::new(driver, counter, audit, Duration::from_millis(0), 3)
}
