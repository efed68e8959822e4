//! Authentication configuration

use super::default_nonce_ttl_secs;
use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Admin API keys allowed to drive purge operations
    #[serde(default)]
    pub admin_keys: Vec<String>,
    /// Secret used to derive replay-protection nonces
    #[serde(default)]
    pub nonce_secret: String,
    /// Nonce lifetime in seconds
    #[serde(default = "default_nonce_ttl_secs")]
    pub nonce_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_keys: Vec::new(),
            nonce_secret: String::new(),
            nonce_ttl_secs: default_nonce_ttl_secs(),
        }
    }
}

impl AuthConfig {
    /// Merge auth configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.admin_keys.is_empty() {
            self.admin_keys = other.admin_keys;
        }
        if !other.nonce_secret.is_empty() {
            self.nonce_secret = other.nonce_secret;
        }
        if other.nonce_ttl_secs != default_nonce_ttl_secs() {
            self.nonce_ttl_secs = other.nonce_ttl_secs;
        }
        self
    }

    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.nonce_ttl_secs == 0 {
            return Err("nonce_ttl_secs cannot be 0".to_string());
        }
        for key in &self.admin_keys {
            if key.len() < 16 {
                return Err("admin keys must be at least 16 characters".to_string());
            }
        }
        Ok(())
    }
}
