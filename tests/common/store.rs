//! In-memory order store with failure injection
//!
//! Mirrors the store port's contract closely enough to prove the driver's
//! batching, retry, stall, and partial-batch properties without a real
//! database. Failure injection covers the three interesting shapes: a row
//! whose delete always fails, a store that dies after K successful deletes,
//! and a store that is unreachable outright.

use async_trait::async_trait;
use orderpurge_rs::core::{OrderId, OrderStore};
use orderpurge_rs::utils::error::{PurgeError, Result};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Default)]
struct Inner {
    /// Order id -> record type; BTreeMap keeps selection id-ascending
    rows: BTreeMap<OrderId, String>,
    /// Order id -> number of metadata rows
    meta: HashMap<OrderId, u64>,
    /// Rows whose deletes are rejected by the store
    failing_rows: HashSet<OrderId>,
    /// Remaining successful deletes before the store goes unavailable
    deletes_until_outage: Option<u64>,
    /// Hard outage toggle
    unavailable: bool,
    next_id: OrderId,
}

/// In-memory implementation of the order store port
#[derive(Default)]
pub struct InMemoryOrderStore {
    inner: Mutex<Inner>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `n` matching orders, each with two metadata rows
    pub fn seed(&self, n: u64) -> Vec<OrderId> {
        let mut inner = self.inner.lock();
        let mut ids = Vec::with_capacity(n as usize);
        for _ in 0..n {
            inner.next_id += 1;
            let id = inner.next_id;
            inner.rows.insert(id, super::TYPE_FILTER.to_string());
            inner.meta.insert(id, 2);
            ids.push(id);
        }
        ids
    }

    /// Seed one row of a different record type, untouched by the filter
    pub fn seed_other_type(&self) -> OrderId {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(id, "subscription".to_string());
        id
    }

    /// Make a specific row's delete fail deterministically
    pub fn fail_deletes_of(&self, id: OrderId) {
        self.inner.lock().failing_rows.insert(id);
    }

    /// Let `k` deletes succeed, then flip the store to unavailable
    pub fn outage_after_deletes(&self, k: u64) {
        self.inner.lock().deletes_until_outage = Some(k);
    }

    /// Bring an unavailable store back
    pub fn restore(&self) {
        let mut inner = self.inner.lock();
        inner.unavailable = false;
        inner.deletes_until_outage = None;
    }

    /// Metadata rows left for an order
    pub fn meta_count(&self, id: OrderId) -> u64 {
        *self.inner.lock().meta.get(&id).unwrap_or(&0)
    }

    fn check_available(inner: &Inner) -> Result<()> {
        if inner.unavailable {
            Err(PurgeError::store_unavailable("in-memory store is down"))
        } else {
            Ok(())
        }
    }

    fn delete_row_inner(inner: &mut Inner, id: OrderId) -> Result<bool> {
        Self::check_available(inner)?;

        if let Some(remaining) = inner.deletes_until_outage {
            if remaining == 0 {
                inner.unavailable = true;
                return Err(PurgeError::store_unavailable("in-memory store is down"));
            }
        }

        if inner.failing_rows.contains(&id) {
            return Ok(false);
        }

        let removed = inner.rows.remove(&id).is_some();
        if removed {
            if let Some(remaining) = inner.deletes_until_outage.as_mut() {
                *remaining -= 1;
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn count_matching(&self, type_filter: &str) -> Result<u64> {
        let inner = self.inner.lock();
        Self::check_available(&inner)?;
        Ok(inner.rows.values().filter(|t| *t == type_filter).count() as u64)
    }

    async fn select_batch(&self, type_filter: &str, limit: u32) -> Result<Vec<OrderId>> {
        let inner = self.inner.lock();
        Self::check_available(&inner)?;
        Ok(inner
            .rows
            .iter()
            .filter(|(_, t)| *t == type_filter)
            .map(|(id, _)| *id)
            .take(limit as usize)
            .collect())
    }

    async fn delete_order(&self, id: OrderId) -> Result<bool> {
        let mut inner = self.inner.lock();
        let removed = Self::delete_row_inner(&mut inner, id)?;
        if removed {
            inner.meta.remove(&id);
        }
        Ok(removed)
    }

    async fn delete_row(&self, id: OrderId) -> Result<bool> {
        let mut inner = self.inner.lock();
        Self::delete_row_inner(&mut inner, id)
    }

    async fn delete_meta(&self, id: OrderId) -> Result<u64> {
        let mut inner = self.inner.lock();
        Self::check_available(&inner)?;
        Ok(inner.meta.remove(&id).unwrap_or(0))
    }
}
