//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::core::{BatchDriver, CountService};
use crate::monitoring::audit::AuditSink;
use crate::services::JobRunner;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across threads. The
/// job mutex enforces the one-purge-job-at-a-time invariant.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Batched deletion driver
    pub driver: Arc<BatchDriver>,
    /// Count service
    pub counter: Arc<CountService>,
    /// Full-run job orchestrator
    pub runner: Arc<JobRunner>,
    /// Audit trail sink
    pub audit: Arc<dyn AuditSink>,
    /// Guards against concurrent full-job runs
    pub job_lock: Arc<tokio::sync::Mutex<()>>,
}

impl AppState {
    /// Create a new AppState with shared resources
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Config,
        auth: AuthSystem,
        storage: StorageLayer,
        driver: Arc<BatchDriver>,
        counter: Arc<CountService>,
        runner: JobRunner,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            storage: Arc::new(storage),
            driver,
            counter,
            runner: Arc::new(runner),
            audit,
            job_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
