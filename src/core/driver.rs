//! Batch deletion driver
//!
//! One `process_batch` call selects up to `batch_size` matching rows,
//! deletes each through the configured strategy, re-queries the remaining
//! count, and appends an audit entry. Calls are stateless and independent;
//! a failed row stays selectable and is naturally retried by the next call.

use super::outcome::BatchOutcome;
use super::store::OrderStore;
use super::strategy::DeleteStrategy;
use crate::monitoring::audit::AuditSink;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Stateless batched deletion driver
pub struct BatchDriver {
    store: Arc<dyn OrderStore>,
    strategy: Arc<dyn DeleteStrategy>,
    audit: Arc<dyn AuditSink>,
    type_filter: String,
    batch_size: u32,
}

impl BatchDriver {
    /// Create a driver over a store, strategy, and audit sink
    pub fn new(
        store: Arc<dyn OrderStore>,
        strategy: Arc<dyn DeleteStrategy>,
        audit: Arc<dyn AuditSink>,
        type_filter: String,
        batch_size: u32,
    ) -> Self {
        Self {
            store,
            strategy,
            audit,
            type_filter,
            batch_size,
        }
    }

    /// Batch size this driver was configured with
    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }

    /// Process one deletion batch
    ///
    /// The remaining count is always a fresh store read, never derived by
    /// subtraction: individual deletes can fail without failing the batch.
    /// Connectivity-level store failures abort the call with no partial
    /// result; whatever rows were already deleted stay deleted and the next
    /// call resumes from the store's current state.
    pub async fn process_batch(&self) -> Result<BatchOutcome> {
        let ids = self
            .store
            .select_batch(&self.type_filter, self.batch_size)
            .await?;
        debug!(selected = ids.len(), "processing deletion batch");

        let mut rows = Vec::with_capacity(ids.len());
        let mut deleted_count = 0u64;

        for id in ids {
            let outcome = self.strategy.delete(self.store.as_ref(), id).await?;
            if outcome.is_deleted() {
                deleted_count += 1;
            }
            rows.push((id, outcome));
        }

        let remaining_count = self.store.count_matching(&self.type_filter).await?;

        self.audit.append(&format!(
            "Batch processed: {} orders deleted, {} remaining",
            deleted_count, remaining_count
        ))?;
        info!(
            deleted = deleted_count,
            remaining = remaining_count,
            strategy = self.strategy.name(),
            "batch complete"
        );

        Ok(BatchOutcome {
            deleted_count,
            remaining_count,
            rows,
        })
    }
}
