//! Authentication middleware
//!
//! Every request under `/admin` must present a configured admin API key.
//! Rejection happens here, before any handler runs, so an unauthorized
//! caller never reaches the store. Mutating handlers additionally call
//! [`require_nonce`] to check the replay-protection token.

use crate::server::state::AppState;
use crate::utils::error::PurgeError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::HeaderMap;
use actix_web::{HttpRequest, ResponseError, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};

/// Name of the admin key header
pub const API_KEY_HEADER: &str = "x-api-key";
/// Name of the replay-protection nonce header
pub const NONCE_HEADER: &str = "x-purge-nonce";

/// Extract the admin API key from request headers
pub fn api_key_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Verify the replay-protection nonce on a mutating request
pub fn require_nonce(req: &HttpRequest, state: &AppState) -> Result<(), PurgeError> {
    let api_key = api_key_from_headers(req.headers())
        .ok_or_else(|| PurgeError::unauthorized("missing X-Api-Key header"))?;
    let nonce = req
        .headers()
        .get(NONCE_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| PurgeError::forbidden("missing X-Purge-Nonce header"))?;

    state.auth.verify_nonce(&api_key, nonce)
}

/// Admin auth middleware for Actix-web
pub struct AdminAuth;

impl<S, B> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AdminAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminAuthService { service }))
    }
}

/// Service implementation for admin auth middleware
pub struct AdminAuthService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AdminAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();

        let verdict = match state {
            Some(state) => match api_key_from_headers(req.headers()) {
                Some(key) => state.auth.verify_key(&key),
                None => Err(PurgeError::unauthorized("missing X-Api-Key header")),
            },
            None => Err(PurgeError::internal("missing application state")),
        };

        match verdict {
            Ok(()) => {
                debug!(path = %req.path(), "admin key accepted");
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
            }
            Err(e) => {
                warn!(path = %req.path(), error = %e, "admin request rejected");
                let (request, _pl) = req.into_parts();
                let response = e.error_response().map_into_right_body();
                Box::pin(async move { Ok(ServiceResponse::new(request, response)) })
            }
        }
    }
}
