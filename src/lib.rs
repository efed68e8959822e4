//! # OrderPurge-RS
//!
//! A batched bulk-deletion service for e-commerce order stores. Orders are
//! removed in fixed-size batches with progress tracking, an authoritative
//! remaining count after every batch, stall detection, and an append-only
//! audit trail.
//!
//! ## Features
//!
//! - **Batched deletion**: fixed-size batches with deterministic,
//!   id-ascending selection, safe to re-invoke after any failure
//! - **Typed per-row outcomes**: failed deletes are skipped and retried by
//!   the next batch, never silently miscounted
//! - **Job orchestration**: an explicit state machine (pending, running,
//!   completed, failed, stalled) with paced batches and a stall guard
//! - **Two deletion strategies**: domain-aware cascade, or generic row
//!   delete with explicit metadata cleanup
//! - **Audit trail**: timestamped append-only log of every count and batch
//! - **Authenticated surface**: admin API keys plus replay-protection
//!   nonces in front of every mutating endpoint
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orderpurge_rs::{Config, PurgeService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/purger.yaml").await?;
//!     let service = PurgeService::new(config).await?;
//!     service.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use crate::core::{
    BatchDriver, BatchOutcome, CountService, OrderStore, RowOutcome, SkipReason,
};
pub use config::Config;
pub use services::{JobReport, JobRunner, JobState};
pub use utils::error::{PurgeError, Result};

use tracing::info;

/// The purge service: configuration plus its HTTP control surface
pub struct PurgeService {
    config: Config,
    server: server::HttpServer,
}

impl PurgeService {
    /// Create a new service instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new purge service instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the service
    pub async fn run(self) -> Result<()> {
        info!("Starting order purge service");
        info!("Listening on {}", self.config.server().address());

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
