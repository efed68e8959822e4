//! Configuration validation
//!
//! This module provides validation logic for the top-level configuration.

use super::Config;
use crate::utils::error::{PurgeError, Result};
use tracing::debug;

/// Trait for validating configuration structures
pub trait Validate {
    /// Validate the configuration, returning the first problem found
    fn validate(&self) -> Result<()>;
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .server
            .validate()
            .map_err(|e| PurgeError::Config(format!("server: {}", e)))?;
        self.service
            .storage
            .database
            .validate()
            .map_err(|e| PurgeError::Config(format!("storage.database: {}", e)))?;
        self.service
            .auth
            .validate()
            .map_err(|e| PurgeError::Config(format!("auth: {}", e)))?;
        self.service
            .purge
            .validate()
            .map_err(|e| PurgeError::Config(format!("purge: {}", e)))?;
        self.service
            .audit
            .validate()
            .map_err(|e| PurgeError::Config(format!("audit: {}", e)))?;

        Ok(())
    }
}
