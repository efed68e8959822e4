//! Count service
//!
//! Answers "how many target rows remain" with a fresh store read. Never
//! cached; a reachable-store failure propagates instead of reading as zero.

use super::store::OrderStore;
use crate::monitoring::audit::AuditSink;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Fresh aggregate count of rows matching the type filter
pub struct CountService {
    store: Arc<dyn OrderStore>,
    audit: Arc<dyn AuditSink>,
    type_filter: String,
}

impl CountService {
    /// Create a count service over a store and audit sink
    pub fn new(store: Arc<dyn OrderStore>, audit: Arc<dyn AuditSink>, type_filter: String) -> Self {
        Self {
            store,
            audit,
            type_filter,
        }
    }

    /// Count matching rows at this instant
    pub async fn count(&self) -> Result<u64> {
        let count = self.store.count_matching(&self.type_filter).await?;
        debug!(count, type_filter = %self.type_filter, "order count requested");

        self.audit
            .append(&format!("Order count requested: {}", count))?;

        Ok(count)
    }
}
