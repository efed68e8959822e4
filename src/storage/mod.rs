//! Storage layer for the purge service
//!
//! This module provides persistence for order rows and their metadata.

/// Database storage module
pub mod database;

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer holding the database backend
#[derive(Clone)]
pub struct StorageLayer {
    /// Database connection
    pub database: Arc<database::Database>,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);

        info!("Storage layer initialized successfully");
        Ok(Self { database })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations");
        self.database.migrate().await?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Health check for the storage backend
    pub async fn health_check(&self) -> StorageHealthStatus {
        let database = match self.database.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
                false
            }
        };

        StorageHealthStatus {
            overall: database,
            database,
        }
    }
}

/// Health status of the storage backends
#[derive(Debug, Clone, serde::Serialize)]
pub struct StorageHealthStatus {
    /// Whether storage is healthy overall
    pub overall: bool,
    /// Whether the database responds to pings
    pub database: bool,
}
