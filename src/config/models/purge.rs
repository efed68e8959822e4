//! Purge driver configuration

use super::{
    default_batch_delay_ms, default_batch_size, default_stall_threshold, default_type_filter,
};
use serde::{Deserialize, Serialize};

/// Deletion strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeleteMode {
    /// Domain-aware delete removing the order and its metadata together
    #[default]
    Cascade,
    /// Generic row delete with an explicit secondary metadata cleanup
    RowFallback,
}

/// Purge driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeConfig {
    /// Maximum rows removed per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
    /// Record-type discriminator selecting target rows
    #[serde(default = "default_type_filter")]
    pub type_filter: String,
    /// Delay between consecutive batches in a job run, in milliseconds
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
    /// Number of consecutive no-progress batches before a job is declared stalled
    #[serde(default = "default_stall_threshold")]
    pub stall_threshold: u32,
    /// Which deletion capability to use
    #[serde(default)]
    pub delete_mode: DeleteMode,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            type_filter: default_type_filter(),
            batch_delay_ms: default_batch_delay_ms(),
            stall_threshold: default_stall_threshold(),
            delete_mode: DeleteMode::default(),
        }
    }
}

impl PurgeConfig {
    /// Merge purge configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.batch_size != default_batch_size() {
            self.batch_size = other.batch_size;
        }
        if other.type_filter != default_type_filter() {
            self.type_filter = other.type_filter;
        }
        if other.batch_delay_ms != default_batch_delay_ms() {
            self.batch_delay_ms = other.batch_delay_ms;
        }
        if other.stall_threshold != default_stall_threshold() {
            self.stall_threshold = other.stall_threshold;
        }
        if other.delete_mode != DeleteMode::default() {
            self.delete_mode = other.delete_mode;
        }
        self
    }

    /// Validate purge configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("batch_size must be positive".to_string());
        }
        if self.type_filter.is_empty() {
            return Err("type_filter cannot be empty".to_string());
        }
        if self.stall_threshold == 0 {
            return Err("stall_threshold must be positive".to_string());
        }
        Ok(())
    }
}
