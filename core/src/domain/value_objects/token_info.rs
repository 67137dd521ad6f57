//! Token info value object for validity reporting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::token::AccessToken;

/// Snapshot of a token's validity, suitable for reporting to end users
///
/// This is a read-time projection: `remaining_days` is computed against the
/// clock at the moment of the query and goes negative once the token has
/// expired.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenInfo {
    /// Whole days until expiration, negative once expired
    pub remaining_days: i64,

    /// Activation date as a plain `YYYY-MM-DD` calendar date
    pub activation_date: String,

    /// The owning user's identifier
    pub user_guid: String,

    /// The group the token is currently associated with
    pub group_guid: String,
}

impl TokenInfo {
    /// Builds the projection for a token as of `now`
    ///
    /// # Arguments
    ///
    /// * `token` - The token record to project
    /// * `validity_days` - The validity window in force
    /// * `now` - The instant to compute remaining validity against
    pub fn from_token(token: &AccessToken, validity_days: i64, now: DateTime<Utc>) -> Self {
        Self {
            remaining_days: token.remaining_days(validity_days, now),
            activation_date: token.activation_date.format("%Y-%m-%d").to_string(),
            user_guid: token.guid.clone(),
            group_guid: token.group_guid.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::token::TOKEN_VALIDITY_DAYS;

    #[test]
    fn test_projection_fields() {
        let token = AccessToken::new(
            "user_guid_1".to_string(),
            "token_123".to_string(),
            "group_guid_1".to_string(),
        );

        let info = TokenInfo::from_token(&token, TOKEN_VALIDITY_DAYS, token.activation_date);

        assert_eq!(info.remaining_days, TOKEN_VALIDITY_DAYS);
        assert_eq!(
            info.activation_date,
            token.activation_date.format("%Y-%m-%d").to_string()
        );
        assert_eq!(info.user_guid, "user_guid_1");
        assert_eq!(info.group_guid, "group_guid_1");
    }

    #[test]
    fn test_projection_serializes_for_callers() {
        let token = AccessToken::new(
            "user_guid_1".to_string(),
            "token_123".to_string(),
            "group_guid_1".to_string(),
        );
        let info = TokenInfo::from_token(&token, TOKEN_VALIDITY_DAYS, token.activation_date);

        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["remaining_days"], TOKEN_VALIDITY_DAYS);
        assert_eq!(json["user_guid"], "user_guid_1");
        assert_eq!(json["group_guid"], "group_guid_1");
    }
}
