use crate::config::DatabaseConfig;
use crate::core::store::{OrderId, OrderStore};
use crate::utils::error::{PurgeError, Result};
use async_trait::async_trait;
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::entities::{self, order, order_meta};
use super::migration::Migrator;

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    db: DatabaseConnection,
}

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(false);

        let db = Database::connect(opt).await.map_err(map_db_err)?;

        info!("Database connection established");
        Ok(Self { db })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            PurgeError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Check database connectivity
    pub async fn health_check(&self) -> Result<()> {
        self.db.ping().await.map_err(map_db_err)
    }

    /// Raw connection handle, for callers that seed or inspect rows directly
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Connectivity-level failures are `StoreUnavailable`; everything else is a
/// plain database error.
fn map_db_err(e: DbErr) -> PurgeError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            PurgeError::StoreUnavailable(e.to_string())
        }
        other => PurgeError::Database(other),
    }
}

#[async_trait]
impl OrderStore for SeaOrmDatabase {
    async fn count_matching(&self, type_filter: &str) -> Result<u64> {
        let count = entities::Order::find()
            .filter(order::Column::RecordType.eq(type_filter))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        debug!(count, type_filter, "counted matching orders");
        Ok(count)
    }

    async fn select_batch(&self, type_filter: &str, limit: u32) -> Result<Vec<OrderId>> {
        let rows = entities::Order::find()
            .filter(order::Column::RecordType.eq(type_filter))
            .order_by_asc(order::Column::Id)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|m| m.id).collect())
    }

    async fn delete_order(&self, id: OrderId) -> Result<bool> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        entities::OrderMeta::delete_many()
            .filter(order_meta::Column::OrderId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let deleted = entities::Order::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(deleted.rows_affected > 0)
    }

    async fn delete_row(&self, id: OrderId) -> Result<bool> {
        let deleted = entities::Order::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(deleted.rows_affected > 0)
    }

    async fn delete_meta(&self, id: OrderId) -> Result<u64> {
        let deleted = entities::OrderMeta::delete_many()
            .filter(order_meta::Column::OrderId.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(deleted.rows_affected)
    }
}
