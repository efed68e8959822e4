//! Purge job orchestration
//!
//! The driver is a stateless per-batch operation; this runner owns the job
//! state machine around it. It snapshots the starting total, paces batches
//! with a fixed delay, accumulates progress, and aborts with `Stalled` when
//! consecutive batches stop making progress. Repeated runs are safe: a
//! failed or interrupted job resumes from whatever the store still holds.

use crate::core::{BatchDriver, CountService};
use crate::monitoring::audit::AuditSink;
use crate::utils::error::{PurgeError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// State of a purge job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    /// Created, no batch issued yet
    Pending,
    /// Batches are being issued
    Running,
    /// The store reported zero remaining rows
    Completed,
    /// A hard store failure aborted the run
    Failed,
    /// Consecutive batches made no progress
    Stalled,
}

/// Progress accounting for one job run
///
/// `remaining` is always the store's own post-batch count; it is never
/// derived from `total_at_start - processed`, because individual deletes
/// can fail without failing their batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JobProgress {
    /// Matching rows when the job started, snapshotted once
    pub total_at_start: u64,
    /// Rows deleted so far, accumulated across batches
    pub processed: u64,
    /// Fresh post-batch count of matching rows
    pub remaining: u64,
}

impl JobProgress {
    /// Percent complete relative to the starting snapshot
    pub fn percent(&self) -> u8 {
        if self.total_at_start == 0 {
            return 100;
        }
        let pct = (self.processed as f64 / self.total_at_start as f64) * 100.0;
        pct.round().min(100.0) as u8
    }
}

/// Final report of a job run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReport {
    /// Identifier of this run
    pub job_id: Uuid,
    /// Terminal state of the job
    pub state: JobState,
    /// Progress at termination
    pub progress: JobProgress,
    /// Batches issued
    pub batches: u32,
    /// Error message when the job failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Drives the batch driver to completion with pacing and a stall guard
pub struct JobRunner {
    driver: Arc<BatchDriver>,
    counter: Arc<CountService>,
    audit: Arc<dyn AuditSink>,
    batch_delay: Duration,
    stall_threshold: u32,
}

impl JobRunner {
    /// Create a runner over a driver and count service
    pub fn new(
        driver: Arc<BatchDriver>,
        counter: Arc<CountService>,
        audit: Arc<dyn AuditSink>,
        batch_delay: Duration,
        stall_threshold: u32,
    ) -> Self {
        Self {
            driver,
            counter,
            audit,
            batch_delay,
            stall_threshold,
        }
    }

    /// Run the job until the store drains, fails, or stalls
    pub async fn run(&self) -> Result<JobReport> {
        let job_id = Uuid::new_v4();
        let total_at_start = self.counter.count().await?;
        let mut progress = JobProgress {
            total_at_start,
            processed: 0,
            remaining: total_at_start,
        };
        let mut state = JobState::Running;
        let mut batches = 0u32;
        let mut last_remaining = total_at_start;
        let mut no_progress_batches = 0u32;
        let mut error = None;

        info!(%job_id, total_at_start, "starting purge job");
        self.audit.append(&format!(
            "Starting bulk deletion job {} ({} orders)",
            job_id, total_at_start
        ))?;

        if total_at_start == 0 {
            return Ok(JobReport {
                job_id,
                state: JobState::Completed,
                progress,
                batches: 0,
                error: None,
            });
        }

        loop {
            let outcome = match self.driver.process_batch().await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(error = %e, "purge job aborted by store failure");
                    state = JobState::Failed;
                    error = Some(e.to_string());
                    break;
                }
            };

            batches += 1;
            progress.processed += outcome.deleted_count;
            progress.remaining = outcome.remaining_count;

            if outcome.remaining_count == 0 {
                state = JobState::Completed;
                break;
            }

            if outcome.remaining_count >= last_remaining {
                no_progress_batches += 1;
                if no_progress_batches >= self.stall_threshold {
                    warn!(
                        remaining = outcome.remaining_count,
                        batches = no_progress_batches,
                        "purge job stalled, aborting"
                    );
                    state = JobState::Stalled;
                    break;
                }
            } else {
                no_progress_batches = 0;
            }
            last_remaining = outcome.remaining_count;

            tokio::time::sleep(self.batch_delay).await;
        }

        info!(
            %job_id,
            state = ?state,
            processed = progress.processed,
            remaining = progress.remaining,
            batches,
            "purge job finished"
        );
        self.audit.append(&format!(
            "Deletion job {} finished: {:?}, {} deleted, {} remaining",
            job_id, state, progress.processed, progress.remaining
        ))?;

        Ok(JobReport {
            job_id,
            state,
            progress,
            batches,
            error,
        })
    }
}

impl JobReport {
    /// Convert a failed report into the error it carries
    pub fn into_result(self) -> Result<JobReport> {
        match self.state {
            JobState::Failed => Err(PurgeError::internal(
                self.error
                    .unwrap_or_else(|| "purge job failed".to_string()),
            )),
            _ => Ok(self),
        }
    }
}
