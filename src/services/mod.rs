//! Services module
//!
//! This module contains business logic built on top of the core driver.

pub mod job;

pub use job::{JobProgress, JobReport, JobRunner, JobState};
