//! Main service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Purge driver configuration
    #[serde(default)]
    pub purge: PurgeConfig,
    /// Audit log configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl ServiceConfig {
    /// Build a configuration from environment variables only
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("PURGE_DATABASE_URL") {
            config.storage.database.url = url;
            config.storage.database.enabled = true;
        }
        if let Ok(host) = std::env::var("PURGE_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PURGE_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| crate::utils::error::PurgeError::Config(
                    format!("PURGE_PORT is not a valid port: {}", port),
                ))?;
        }
        if let Ok(key) = std::env::var("PURGE_ADMIN_KEY") {
            config.auth.admin_keys.push(key);
        }
        if let Ok(secret) = std::env::var("PURGE_NONCE_SECRET") {
            config.auth.nonce_secret = secret;
        }
        if let Ok(path) = std::env::var("PURGE_AUDIT_LOG") {
            config.audit.log_path = path;
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.storage = self.storage.merge(other.storage);
        self.auth = self.auth.merge(other.auth);
        self.purge = self.purge.merge(other.purge);
        self.audit = self.audit.merge(other.audit);
        self
    }
}
