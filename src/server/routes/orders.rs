//! Order purge endpoints
//!
//! The two operations the orchestration surface exposes over the core:
//! a fresh count, and one deletion batch per request. A full-run endpoint
//! drives the job runner server-side for callers that do not want to poll.

use crate::core::outcome::RowOutcome;
use crate::server::middleware::require_nonce;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::PurgeError;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use tracing::debug;

/// Configure order purge routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("/count", web::get().to(count_orders))
            .route("/count", web::post().to(count_orders))
            .route("/purge", web::post().to(purge_batch))
            .route("/purge/run", web::post().to(purge_run)),
    );
}

/// Count of matching orders
#[derive(Debug, Clone, Serialize)]
struct CountResponse {
    count: u64,
}

/// One skipped row in a batch response
#[derive(Debug, Clone, Serialize)]
struct SkippedRow {
    id: i64,
    reason: crate::core::outcome::SkipReason,
}

/// Result of one deletion batch
#[derive(Debug, Clone, Serialize)]
struct PurgeBatchResponse {
    deleted_count: u64,
    remaining_count: u64,
    skipped: Vec<SkippedRow>,
}

/// Count matching orders with a fresh store read
async fn count_orders(
    state: web::Data<AppState>,
) -> Result<HttpResponse, PurgeError> {
    debug!("Order count requested");

    let count = state.counter.count().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(CountResponse { count })))
}

/// Process one deletion batch
async fn purge_batch(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PurgeError> {
    require_nonce(&req, &state)?;

    let outcome = state.driver.process_batch().await?;
    let skipped = outcome
        .rows
        .iter()
        .filter_map(|(id, row)| match row {
            RowOutcome::Deleted => None,
            RowOutcome::Skipped { reason } => Some(SkippedRow {
                id: *id,
                reason: *reason,
            }),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(PurgeBatchResponse {
        deleted_count: outcome.deleted_count,
        remaining_count: outcome.remaining_count,
        skipped,
    })))
}

/// Run a purge job to completion
///
/// Holds the job lock for the whole run so two runs cannot interleave;
/// a second caller gets a conflict instead of a duplicate job.
async fn purge_run(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PurgeError> {
    require_nonce(&req, &state)?;

    let _guard = state
        .job_lock
        .try_lock()
        .map_err(|_| PurgeError::conflict("a purge job is already running"))?;

    let report = state.runner.run().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(report)))
}
