//! Deletion strategies
//!
//! Two capabilities for removing a single order. The orchestration layer
//! picks one at construction time; the driver itself never inspects which
//! capability it holds.

use super::outcome::{RowOutcome, SkipReason};
use super::store::{OrderId, OrderStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Capability for deleting one order row
#[async_trait]
pub trait DeleteStrategy: Send + Sync {
    /// Attempt to delete a single order, reporting the typed outcome
    ///
    /// A store that rejects the delete yields `Skipped`, not an error;
    /// only connectivity-level failures propagate as `Err`.
    async fn delete(&self, store: &dyn OrderStore, id: OrderId) -> Result<RowOutcome>;

    /// Human-readable strategy name for audit entries
    fn name(&self) -> &'static str;
}

/// Domain-aware delete: the order and its metadata go together
#[derive(Debug, Clone, Copy, Default)]
pub struct CascadeDelete;

#[async_trait]
impl DeleteStrategy for CascadeDelete {
    async fn delete(&self, store: &dyn OrderStore, id: OrderId) -> Result<RowOutcome> {
        if store.delete_order(id).await? {
            Ok(RowOutcome::Deleted)
        } else {
            debug!(order_id = id, "cascade delete rejected by store");
            Ok(RowOutcome::Skipped {
                reason: SkipReason::StoreRejected,
            })
        }
    }

    fn name(&self) -> &'static str {
        "cascade"
    }
}

/// Generic row delete with explicit metadata cleanup
///
/// Used when the domain-aware capability is not available. The metadata
/// delete is a separate second step so no orphaned metadata rows remain.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowFallbackDelete;

#[async_trait]
impl DeleteStrategy for RowFallbackDelete {
    async fn delete(&self, store: &dyn OrderStore, id: OrderId) -> Result<RowOutcome> {
        if store.delete_row(id).await? {
            let meta_rows = store.delete_meta(id).await?;
            debug!(order_id = id, meta_rows, "row delete with meta cleanup");
            Ok(RowOutcome::Deleted)
        } else {
            Ok(RowOutcome::Skipped {
                reason: SkipReason::StoreRejected,
            })
        }
    }

    fn name(&self) -> &'static str {
        "row_fallback"
    }
}
