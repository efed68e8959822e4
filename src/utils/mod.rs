//! Utility modules for the purge service
//!
//! Cross-cutting utilities shared by the rest of the crate. Error handling
//! lives here; everything else is owned by the module it serves.

pub mod error;

pub use error::{PurgeError, Result};
