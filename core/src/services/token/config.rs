//! Configuration for the token lifecycle policy

use crate::domain::entities::token::TOKEN_VALIDITY_DAYS;

/// Configuration for the token lifecycle policy
///
/// The validity window applies uniformly to every token; it is not a
/// per-record setting.
#[derive(Debug, Clone)]
pub struct TokenPolicyConfig {
    /// Token validity window in days, measured from the activation date
    pub validity_days: i64,
}

impl Default for TokenPolicyConfig {
    fn default() -> Self {
        Self {
            validity_days: TOKEN_VALIDITY_DAYS,
        }
    }
}
