//! # TokenVault Infrastructure
//!
//! This crate implements the infrastructure layer for the TokenVault token
//! store. It provides the SQLite-backed implementation of the core repository
//! trait, connection pool management, and database configuration.
//!
//! Storage location is an explicit configuration value passed in at
//! construction, never process-global state, so multiple isolated instances
//! (including in-memory test databases) can coexist in one process.

// Re-export core error types for convenience
pub use tv_core::errors::*;

/// Configuration for infrastructure services
pub mod config;

/// Database module - SQLite implementations using SQLx
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
