//! Database module - SQLite implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management and schema creation
//! - The SQLite implementation of the token repository

pub mod connection;
pub mod sqlite;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use sqlite::SqliteTokenRepository;
