//! Database integration tests
//!
//! Tests the SeaORM store implementation against a real in-memory SQLite
//! database: counting, ordered batch selection, and both delete paths.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use orderpurge_rs::core::OrderStore;

    #[tokio::test]
    async fn test_migrate_and_health_check() {
        let db = TestDatabase::new().await;
        assert!(db.db.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_count_matching_respects_type_filter() {
        let db = TestDatabase::new().await;
        db.insert_order("shop_order").await;
        db.insert_order("shop_order").await;
        db.insert_order("subscription").await;

        assert_eq!(db.db.count_matching("shop_order").await.unwrap(), 2);
        assert_eq!(db.db.count_matching("subscription").await.unwrap(), 1);
        assert_eq!(db.db.count_matching("invoice").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_select_batch_is_ascending_and_limited() {
        let db = TestDatabase::new().await;
        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(db.insert_order("shop_order").await);
        }

        let batch = db.db.select_batch("shop_order", 3).await.unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch, ids[..3].to_vec());
        assert!(batch.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_cascade_delete_removes_meta_in_one_step() {
        let db = TestDatabase::new().await;
        let id = db.insert_order("shop_order").await;
        db.insert_meta(id, "_billing_email", "a@example.com").await;
        db.insert_meta(id, "_total", "25.00").await;

        assert!(db.db.delete_order(id).await.unwrap());
        assert_eq!(db.db.count_matching("shop_order").await.unwrap(), 0);
        // Metadata went with the order
        assert_eq!(db.db.delete_meta(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_row_delete_leaves_meta_for_explicit_cleanup() {
        let db = TestDatabase::new().await;
        let id = db.insert_order("shop_order").await;
        db.insert_meta(id, "_billing_email", "a@example.com").await;

        assert!(db.db.delete_row(id).await.unwrap());
        // The generic row delete does not touch metadata
        assert_eq!(db.db.delete_meta(id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_deleting_absent_row_reports_false() {
        let db = TestDatabase::new().await;
        assert!(!db.db.delete_order(9999).await.unwrap());
        assert!(!db.db.delete_row(9999).await.unwrap());
    }
}
