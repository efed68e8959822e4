//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, DeleteMode, ServerConfig};
use crate::core::{
    BatchDriver, CascadeDelete, CountService, DeleteStrategy, OrderStore, RowFallbackDelete,
};
use crate::monitoring::audit::{AuditSink, FileAuditSink};
use crate::server::middleware::AdminAuth;
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::JobRunner;
use crate::utils::error::{PurgeError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = crate::storage::StorageLayer::new(config.storage()).await?;
        storage.migrate().await?;

        let auth = crate::auth::AuthSystem::new(config.auth())?;

        let audit: Arc<dyn AuditSink> =
            Arc::new(FileAuditSink::new(&config.audit().log_path));

        let store: Arc<dyn OrderStore> = storage.database.clone();
        let strategy: Arc<dyn DeleteStrategy> = match config.purge().delete_mode {
            DeleteMode::Cascade => Arc::new(CascadeDelete),
            DeleteMode::RowFallback => Arc::new(RowFallbackDelete),
        };
        info!(strategy = strategy.name(), "deletion strategy selected");

        let driver = Arc::new(BatchDriver::new(
            store.clone(),
            strategy,
            audit.clone(),
            config.purge().type_filter.clone(),
            config.purge().batch_size,
        ));
        let counter = Arc::new(CountService::new(
            store,
            audit.clone(),
            config.purge().type_filter.clone(),
        ));
        let runner = JobRunner::new(
            driver.clone(),
            counter.clone(),
            audit.clone(),
            Duration::from_millis(config.purge().batch_delay_ms),
            config.purge().stall_threshold,
        );

        let state = AppState::new(
            config.clone(),
            auth,
            storage,
            driver,
            counter,
            runner,
            audit,
        );

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub(crate) fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        info!("Setting up routes and middleware");

        App::new()
            .app_data(state)
            .wrap(Cors::default())
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "OrderPurge-RS")))
            .configure(routes::health::configure_routes)
            .service(
                web::scope("/admin")
                    .wrap(AdminAuth)
                    .configure(routes::orders::configure_routes)
                    .configure(routes::session::configure_routes),
            )
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| {
                PurgeError::Config(format!("Cannot bind to {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| PurgeError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
