//! Database configuration module

use serde::{Deserialize, Serialize};

/// Database configuration for SQLite connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL, e.g. `sqlite://tokens.db`
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Create the database file if it does not exist
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,

    /// Enable SQL statement logging
    #[serde(default)]
    pub enable_logging: bool,

    /// Slow query threshold in milliseconds
    #[serde(default = "default_slow_query_threshold")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite://tokens.db"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            create_if_missing: true,
            enable_logging: false,
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    ///
    /// Reads `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, and
    /// `DATABASE_CONNECT_TIMEOUT`, loading a `.env` file first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://tokens.db".to_string());
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Self {
            url,
            max_connections,
            connect_timeout,
            ..Default::default()
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Enable SQL statement logging
    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }

    /// Whether this configuration points at an in-memory database
    ///
    /// In-memory databases live and die with their connection; pools over
    /// them should keep a single persistent connection.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

fn default_create_if_missing() -> bool {
    true
}

fn default_slow_query_threshold() -> u64 {
    1000 // 1 second
}
