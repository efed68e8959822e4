//! Driver integration tests
//!
//! Proves the batching properties over the in-memory store: drain in
//! exactly ceil(N/B) calls, strictly decreasing remaining counts, retry of
//! failed rows, and resumability after a mid-batch outage.

#[cfg(test)]
mod tests {
    use crate::common::{InMemoryOrderStore, driver};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_drains_120_rows_in_three_batches_of_50() {
        let store = Arc::new(InMemoryOrderStore::new());
        store.seed(120);
        let driver = driver(store, 50);

        let first = driver.process_batch().await.unwrap();
        assert_eq!(first.deleted_count, 50);
        assert_eq!(first.remaining_count, 70);

        let second = driver.process_batch().await.unwrap();
        assert_eq!(second.deleted_count, 50);
        assert_eq!(second.remaining_count, 20);

        let third = driver.process_batch().await.unwrap();
        assert_eq!(third.deleted_count, 20);
        assert_eq!(third.remaining_count, 0);
    }

    #[tokio::test]
    async fn test_drain_takes_ceil_n_over_b_calls() {
        for (n, b, expected_calls) in [(10u64, 3u32, 4u32), (9, 3, 3), (1, 50, 1), (50, 50, 1)] {
            let store = Arc::new(InMemoryOrderStore::new());
            store.seed(n);
            let driver = driver(store, b);

            let mut calls = 0;
            let mut last_remaining = n;
            loop {
                let outcome = driver.process_batch().await.unwrap();
                calls += 1;
                // Remaining decreases by min(B, remaining) every call
                let expected = last_remaining - last_remaining.min(b as u64);
                assert_eq!(outcome.remaining_count, expected);
                last_remaining = outcome.remaining_count;
                if outcome.remaining_count == 0 {
                    break;
                }
            }
            assert_eq!(calls, expected_calls, "n={} b={}", n, b);
        }
    }

    #[tokio::test]
    async fn test_empty_store_returns_zero_zero_immediately() {
        let store = Arc::new(InMemoryOrderStore::new());
        let driver = driver(store, 50);

        let outcome = driver.process_batch().await.unwrap();
        assert_eq!(outcome.deleted_count, 0);
        assert_eq!(outcome.remaining_count, 0);
        assert!(outcome.is_drained());
    }

    #[tokio::test]
    async fn test_other_record_types_are_untouched() {
        let store = Arc::new(InMemoryOrderStore::new());
        store.seed(5);
        let other = store.seed_other_type();
        let driver = driver(store.clone(), 50);

        let outcome = driver.process_batch().await.unwrap();
        assert_eq!(outcome.deleted_count, 5);
        assert_eq!(outcome.remaining_count, 0);

        // The non-matching row is still selectable under its own filter
        use orderpurge_rs::core::OrderStore;
        let others = store.select_batch("subscription", 10).await.unwrap();
        assert_eq!(others, vec![other]);
    }

    #[tokio::test]
    async fn test_failing_row_is_skipped_and_reattempted() {
        let store = Arc::new(InMemoryOrderStore::new());
        let ids = store.seed(3);
        store.fail_deletes_of(ids[1]);
        let driver = driver(store.clone(), 50);

        let first = driver.process_batch().await.unwrap();
        assert_eq!(first.deleted_count, 2);
        assert_eq!(first.remaining_count, 1);

        // Cascade took the deleted rows' metadata with them; the failed
        // row keeps its metadata
        assert_eq!(store.meta_count(ids[0]), 0);
        assert_eq!(store.meta_count(ids[1]), 2);

        // The failed row is selected again by the next batch
        let second = driver.process_batch().await.unwrap();
        assert_eq!(second.rows.len(), 1);
        assert_eq!(second.rows[0].0, ids[1]);
        assert_eq!(second.deleted_count, 0);
        assert_eq!(second.remaining_count, 1);
    }

    #[tokio::test]
    async fn test_mid_batch_outage_loses_nothing() {
        let n = 10u64;
        let k = 4u64;
        let store = Arc::new(InMemoryOrderStore::new());
        store.seed(n);
        store.outage_after_deletes(k);
        let driver = driver(store.clone(), 50);

        // The batch aborts after K deletes with a hard failure
        assert!(driver.process_batch().await.is_err());

        // Once the store is back, the next call sees exactly N - K rows
        store.restore();
        let outcome = driver.process_batch().await.unwrap();
        assert_eq!(outcome.rows.len() as u64, n - k);
        assert_eq!(outcome.deleted_count, n - k);
        assert_eq!(outcome.remaining_count, 0);
    }

    #[tokio::test]
    async fn test_count_is_idempotent_without_deletes() {
        use orderpurge_rs::core::OrderStore;

        let store = Arc::new(InMemoryOrderStore::new());
        store.seed(17);

        let a = store.count_matching("shop_order").await.unwrap();
        let b = store.count_matching("shop_order").await.unwrap();
        assert_eq!(a, 17);
        assert_eq!(a, b);
    }
}
