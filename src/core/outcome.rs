//! Typed results for batch deletion
//!
//! Per-row failures are data, not errors: a skipped row stays selectable
//! and is reattempted by the next batch.

use super::store::OrderId;
use serde::{Deserialize, Serialize};

/// Why a row survived its delete attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The row vanished between selection and deletion
    NotFound,
    /// The store reported that no row was removed
    StoreRejected,
}

/// Outcome of one row's delete attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RowOutcome {
    /// The row and its metadata are gone
    Deleted,
    /// The row is still in place
    Skipped {
        /// Why the delete did not happen
        reason: SkipReason,
    },
}

impl RowOutcome {
    /// Whether this row was actually removed
    pub fn is_deleted(&self) -> bool {
        matches!(self, RowOutcome::Deleted)
    }
}

/// Outcome of one driver batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Rows removed by this batch
    pub deleted_count: u64,
    /// Fresh post-batch count of matching rows, re-queried from the store
    pub remaining_count: u64,
    /// Per-row results in selection order
    pub rows: Vec<(OrderId, RowOutcome)>,
}

impl BatchOutcome {
    /// Rows that were selected but not removed
    pub fn skipped_count(&self) -> u64 {
        self.rows.len() as u64 - self.deleted_count
    }

    /// Whether the batch found nothing left to do
    pub fn is_drained(&self) -> bool {
        self.rows.is_empty() && self.remaining_count == 0
    }
}
