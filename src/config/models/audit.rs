//! Audit log configuration

use super::default_log_path;
use serde::{Deserialize, Serialize};

/// Audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Path of the append-only audit log file
    #[serde(default = "default_log_path")]
    pub log_path: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
        }
    }
}

impl AuditConfig {
    /// Merge audit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.log_path != default_log_path() {
            self.log_path = other.log_path;
        }
        self
    }

    /// Validate audit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.log_path.is_empty() {
            return Err("log_path cannot be empty".to_string());
        }
        Ok(())
    }
}
