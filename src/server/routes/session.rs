//! Session endpoints
//!
//! Issues the replay-protection nonce that mutating purge operations
//! require alongside the admin key.

use crate::server::middleware::api_key_from_headers;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::PurgeError;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

/// Configure session routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/session").route("/nonce", web::post().to(issue_nonce)));
}

/// Issued nonce payload
#[derive(Debug, Clone, Serialize)]
struct NonceResponse {
    nonce: String,
    expires_in_secs: u64,
}

/// Issue a nonce bound to the caller's admin key
async fn issue_nonce(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PurgeError> {
    let api_key = api_key_from_headers(req.headers())
        .ok_or_else(|| PurgeError::unauthorized("missing X-Api-Key header"))?;

    let nonce = state.auth.issue_nonce(&api_key)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(NonceResponse {
        nonce,
        expires_in_secs: state.config.auth().nonce_ttl_secs,
    })))
}
