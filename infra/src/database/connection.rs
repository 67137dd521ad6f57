//! Database connection pool management
//!
//! Connection pooling for SQLite using SQLx. Every store operation acquires a
//! connection from this pool, commits within the call, and releases the
//! connection on all exit paths.

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    ConnectOptions, SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;
use crate::InfrastructureError;

/// Idempotent schema for the token table. Expiration is derived from
/// `activation_date` at read time and never stored.
const CREATE_TOKENS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS tokens (
        guid TEXT PRIMARY KEY,
        token TEXT UNIQUE NOT NULL,
        group_guid TEXT NOT NULL,
        activation_date TEXT NOT NULL
    )
"#;

/// Database connection pool wrapper
///
/// Manages the SQLite connection pool with configurable settings for
/// connection limits and timeouts.
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx SQLite connection pool
    pool: SqlitePool,
    /// Configuration used to create this pool
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Example
    /// ```no_run
    /// use tv_infra::config::DatabaseConfig;
    /// use tv_infra::database::connection::DatabasePool;
    ///
    /// async fn create_pool() -> Result<DatabasePool, Box<dyn std::error::Error>> {
    ///     let config = DatabaseConfig::new("sqlite://tokens.db");
    ///     let pool = DatabasePool::new(config).await?;
    ///     pool.run_migrations().await?;
    ///     Ok(pool)
    /// }
    /// ```
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            "Creating database connection pool with max_connections: {}",
            config.max_connections
        );

        let mut connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .create_if_missing(config.create_if_missing);

        connect_options = connect_options
            .log_statements(if config.enable_logging {
                LevelFilter::Debug
            } else {
                LevelFilter::Off
            })
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_query_threshold),
            );

        // An in-memory database exists only as long as its connection, so the
        // pool must hold exactly one.
        let max_connections = if config.is_in_memory() {
            1
        } else {
            config.max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool, config })
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The configuration this pool was created with
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Check if the database connection is healthy
    ///
    /// Performs a simple query to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let result = sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;

        let value: i32 = sqlx::Row::try_get(&result, 0).unwrap_or(0);

        if value == 1 {
            tracing::debug!("Database health check passed");
            Ok(true)
        } else {
            tracing::warn!("Database health check returned unexpected value: {}", value);
            Ok(false)
        }
    }

    /// Create the token schema if it does not exist
    ///
    /// Safe to call on every startup; repeated calls are no-ops.
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Running database migrations");

        sqlx::query(CREATE_TOKENS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create tokens table: {}", e);
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database migrations completed");
        Ok(())
    }

    /// Get connection pool statistics
    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}

/// Connection pool statistics
#[derive(Debug, Clone)]
pub struct PoolStatistics {
    /// Total number of connections in the pool
    pub connections: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Maximum allowed connections
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool Stats: {}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
