//! Row-store port used by the purge driver
//!
//! The driver never talks to a database directly; it goes through this
//! trait so the storage backend stays swappable and the driver testable.

use crate::utils::error::Result;
use async_trait::async_trait;

/// Identifier of an order row
pub type OrderId = i64;

/// Persistent store holding order rows and their metadata
///
/// `select_batch` must return identifiers in ascending order so that
/// repeated batches make deterministic forward progress. Delete methods
/// report whether a row was actually removed; `false` means the store
/// rejected the delete and the row is still in place.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Count rows matching the record-type filter
    async fn count_matching(&self, type_filter: &str) -> Result<u64>;

    /// Select up to `limit` matching row identifiers, ascending by id
    async fn select_batch(&self, type_filter: &str, limit: u32) -> Result<Vec<OrderId>>;

    /// Domain-aware delete: remove the order and its metadata rows together
    async fn delete_order(&self, id: OrderId) -> Result<bool>;

    /// Generic row delete: remove only the order row itself
    async fn delete_row(&self, id: OrderId) -> Result<bool>;

    /// Remove metadata rows belonging to an order, returning how many went
    async fn delete_meta(&self, id: OrderId) -> Result<u64>;
}

#[cfg(test)]
mockall::mock! {
    pub Store {}

    #[async_trait]
    impl OrderStore for Store {
        async fn count_matching(&self, type_filter: &str) -> Result<u64>;
        async fn select_batch(&self, type_filter: &str, limit: u32) -> Result<Vec<OrderId>>;
        async fn delete_order(&self, id: OrderId) -> Result<bool>;
        async fn delete_row(&self, id: OrderId) -> Result<bool>;
        async fn delete_meta(&self, id: OrderId) -> Result<u64>;
    }
}

#[cfg(test)]
pub use self::MockStore as MockOrderStore;
