//! Database storage implementation using SeaORM
//!
//! This module provides database connectivity and the SeaORM-backed
//! implementation of the order-store port.

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM database implementation module
pub mod seaorm_db;

// Re-export the main database interface
pub use seaorm_db::SeaOrmDatabase as Database;
