//! Error handling for the purge service
//!
//! This module defines all error types used throughout the service.

pub mod error;

pub use error::*;
