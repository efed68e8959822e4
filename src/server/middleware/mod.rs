//! HTTP middleware
//!
//! Authorization middleware for the admin scope.

pub mod auth;

pub use auth::{AdminAuth, api_key_from_headers, require_nonce};
