//! Configuration management for the purge service
//!
//! This module handles loading, validation, and management of all service configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PurgeError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the purge service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PurgeError::Config(format!("Failed to read config file: {}", e)))?;

        let service: ServiceConfig = serde_yaml::from_str(&content)
            .map_err(|e| PurgeError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let service = ServiceConfig::from_env()?;
        let config = Self { service };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.service.auth
    }

    /// Get purge configuration
    pub fn purge(&self) -> &PurgeConfig {
        &self.service.purge
    }

    /// Get audit configuration
    pub fn audit(&self) -> &AuditConfig {
        &self.service.audit
    }
}
