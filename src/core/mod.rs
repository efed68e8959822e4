//! Core purge logic
//!
//! This module contains the batched deletion driver and its collaborators:
//! the row-store port, the deletion strategies, the count service, and the
//! typed per-row and per-batch outcomes. Everything here is stateless
//! between calls; job-level state lives in the services layer.

pub mod count;
pub mod driver;
pub mod outcome;
pub mod store;
pub mod strategy;

pub use count::CountService;
pub use driver::BatchDriver;
pub use outcome::{BatchOutcome, RowOutcome, SkipReason};
pub use store::{OrderId, OrderStore};
pub use strategy::{CascadeDelete, DeleteStrategy, RowFallbackDelete};
