//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

pub mod audit;
pub mod auth;
pub mod purge;
pub mod server;
pub mod service;
pub mod storage;

// Re-export all configuration types
pub use audit::*;
pub use auth::*;
pub use purge::*;
pub use server::*;
pub use service::*;
pub use storage::*;

/// Default server host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8700
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default database connection limit
pub fn default_max_connections() -> u32 {
    10
}

/// Default database connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    10
}

/// Default deletion batch size
pub fn default_batch_size() -> u32 {
    50
}

/// Default record-type discriminator for target rows
pub fn default_type_filter() -> String {
    "shop_order".to_string()
}

/// Default delay between batches in milliseconds
pub fn default_batch_delay_ms() -> u64 {
    1000
}

/// Default number of no-progress batches tolerated before a job is stalled
pub fn default_stall_threshold() -> u32 {
    3
}

/// Default audit log path
pub fn default_log_path() -> String {
    "purge-audit.log".to_string()
}

/// Default nonce lifetime in seconds
pub fn default_nonce_ttl_secs() -> u64 {
    12 * 3600
}
