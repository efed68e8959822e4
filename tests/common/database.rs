//! In-memory SQLite database helper

use orderpurge_rs::config::DatabaseConfig;
use orderpurge_rs::storage::database::Database;
use orderpurge_rs::storage::database::entities::{order, order_meta};
use sea_orm::{ActiveModelTrait, Set};

/// A migrated in-memory SQLite database
pub struct TestDatabase {
    pub db: Database,
}

impl TestDatabase {
    /// Create and migrate a fresh in-memory database
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            // A pooled in-memory SQLite gives every connection its own database
            max_connections: 1,
            connection_timeout: 5,
            enabled: true,
        };

        let db = Database::new(&config).await.expect("create database");
        db.migrate().await.expect("run migrations");
        Self { db }
    }

    /// Insert one order of the given record type, returning its id
    pub async fn insert_order(&self, record_type: &str) -> i64 {
        let model = order::ActiveModel {
            record_type: Set(record_type.to_string()),
            status: Set("completed".to_string()),
            total_cents: Set(2500),
            currency: Set("USD".to_string()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
        .insert(self.db.connection())
        .await
        .expect("insert order");
        model.id
    }

    /// Insert one metadata row for an order
    pub async fn insert_meta(&self, order_id: i64, key: &str, value: &str) {
        order_meta::ActiveModel {
            order_id: Set(order_id),
            meta_key: Set(key.to_string()),
            meta_value: Set(Some(value.to_string())),
            ..Default::default()
        }
        .insert(self.db.connection())
        .await
        .expect("insert meta");
    }
}
