//! Diagnostic expiration sweep over the token table
//!
//! The sweep reads every record, computes expiry against a single clock
//! snapshot, and reports the expired set. It never mutates or deletes a
//! record; acting on the report is left to the caller. Scheduling is also the
//! caller's concern: this is a synchronous library call for an external
//! scheduler to drive on whatever cadence is desired.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::DomainError;
use crate::repositories::TokenRepository;

use super::config::TokenPolicyConfig;

/// A token found past its validity window during a sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiredToken {
    /// The owning user's identifier
    pub guid: String,

    /// The expired credential value
    pub token: String,

    /// The instant the validity window closed
    pub expired_at: DateTime<Utc>,
}

/// Summary of one expiration sweep
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Number of records examined
    pub scanned: usize,

    /// Records whose validity window has closed
    pub expired: Vec<ExpiredToken>,
}

/// Service that sweeps the token table for expired records
pub struct ExpirationSweep<R: TokenRepository> {
    repository: Arc<R>,
    config: TokenPolicyConfig,
}

impl<R: TokenRepository> ExpirationSweep<R> {
    /// Create a new expiration sweep over a repository
    pub fn new(repository: Arc<R>, config: TokenPolicyConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single sweep
    ///
    /// Every record is compared against one `Utc::now()` snapshot, so a sweep
    /// is internally consistent even while it logs record by record.
    ///
    /// # Returns
    /// * `Ok(SweepReport)` - The scanned count and the expired set
    /// * `Err(DomainError)` - The bulk read failed
    pub async fn run(&self) -> Result<SweepReport, DomainError> {
        let now = Utc::now();
        let tokens = self.repository.list_all().await?;
        let scanned = tokens.len();

        let mut expired = Vec::new();
        for token in &tokens {
            if token.is_expired(self.config.validity_days, now) {
                let expired_at = token.expires_at(self.config.validity_days);
                warn!(
                    guid = %token.guid,
                    token = %token.token,
                    expired_at = %expired_at,
                    "access token has expired"
                );
                expired.push(ExpiredToken {
                    guid: token.guid.clone(),
                    token: token.token.clone(),
                    expired_at,
                });
            }
        }

        info!(
            scanned = scanned,
            expired = expired.len(),
            "expiration sweep finished"
        );

        Ok(SweepReport { scanned, expired })
    }
}
