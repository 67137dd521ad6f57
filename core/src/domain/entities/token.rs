//! Access token entity with a rolling expiration window.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default token validity window (30 days)
pub const TOKEN_VALIDITY_DAYS: i64 = 30;

/// Seconds in one calendar day, used for whole-day truncation
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Access token record persisted in the database.
///
/// The token value is an opaque string supplied by the caller; this entity
/// does not generate or validate credentials. Expiration is never stored;
/// it is always derived from `activation_date`, so the two cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Unique identifier of the owning user
    pub guid: String,

    /// Opaque credential value, unique across all records
    pub token: String,

    /// Group the token is currently associated with
    pub group_guid: String,

    /// Start of the validity window, reset on renewal
    pub activation_date: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a new access token activated at the current instant
    ///
    /// # Arguments
    ///
    /// * `guid` - The owning user's identifier
    /// * `token` - The opaque credential value
    /// * `group_guid` - The group to associate the token with
    pub fn new(guid: String, token: String, group_guid: String) -> Self {
        Self {
            guid,
            token,
            group_guid,
            activation_date: Utc::now(),
        }
    }

    /// The instant the token expires for the given validity window
    pub fn expires_at(&self, validity_days: i64) -> DateTime<Utc> {
        self.activation_date + Duration::days(validity_days)
    }

    /// Whether the token has expired as of `now`
    ///
    /// A token is expired exactly when `now >= activation_date + window`;
    /// the boundary instant itself counts as expired.
    pub fn is_expired(&self, validity_days: i64, now: DateTime<Utc>) -> bool {
        now >= self.expires_at(validity_days)
    }

    /// Whole days remaining until expiration as of `now`
    ///
    /// Truncates toward negative infinity, so a token half a day past its
    /// window reports -1, not 0. May grow arbitrarily negative once expired.
    pub fn remaining_days(&self, validity_days: i64, now: DateTime<Utc>) -> i64 {
        (self.expires_at(validity_days) - now)
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY)
    }

    /// Resets the activation clock to the current instant
    pub fn renew(&mut self) {
        self.activation_date = Utc::now();
    }

    /// Re-associates the token with a different group
    pub fn reassign_group(&mut self, new_group_guid: String) {
        self.group_guid = new_group_guid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token() -> AccessToken {
        AccessToken::new(
            "user_guid_1".to_string(),
            "token_123".to_string(),
            "group_guid_1".to_string(),
        )
    }

    #[test]
    fn test_new_token_full_window() {
        let token = sample_token();

        // Evaluated at the activation instant the full window remains
        assert_eq!(
            token.remaining_days(TOKEN_VALIDITY_DAYS, token.activation_date),
            TOKEN_VALIDITY_DAYS
        );
        assert!(!token.is_expired(TOKEN_VALIDITY_DAYS, token.activation_date));
    }

    #[test]
    fn test_remaining_days_truncates_within_window() {
        let token = sample_token();
        let half_day_in = token.activation_date + Duration::hours(12);

        assert_eq!(
            token.remaining_days(TOKEN_VALIDITY_DAYS, half_day_in),
            TOKEN_VALIDITY_DAYS - 1
        );
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let token = sample_token();
        let boundary = token.expires_at(TOKEN_VALIDITY_DAYS);

        assert!(token.is_expired(TOKEN_VALIDITY_DAYS, boundary));
        assert_eq!(token.remaining_days(TOKEN_VALIDITY_DAYS, boundary), 0);
    }

    #[test]
    fn test_remaining_days_floors_when_expired() {
        let token = sample_token();
        let past_boundary = token.expires_at(TOKEN_VALIDITY_DAYS) + Duration::hours(12);

        // Half a day past the window floors to -1, not 0
        assert_eq!(token.remaining_days(TOKEN_VALIDITY_DAYS, past_boundary), -1);

        let ten_days_past = token.expires_at(TOKEN_VALIDITY_DAYS) + Duration::days(10);
        assert_eq!(token.remaining_days(TOKEN_VALIDITY_DAYS, ten_days_past), -10);
    }

    #[test]
    fn test_renew_resets_activation() {
        let mut token = sample_token();
        token.activation_date = Utc::now() - Duration::days(40);
        let now = Utc::now();
        assert!(token.is_expired(TOKEN_VALIDITY_DAYS, now));

        token.renew();

        assert!(!token.is_expired(TOKEN_VALIDITY_DAYS, Utc::now()));
        assert!(token.activation_date >= now);
    }

    #[test]
    fn test_reassign_group_changes_only_group() {
        let mut token = sample_token();
        let activation = token.activation_date;

        token.reassign_group("group_guid_2".to_string());

        assert_eq!(token.group_guid, "group_guid_2");
        assert_eq!(token.guid, "user_guid_1");
        assert_eq!(token.token, "token_123");
        assert_eq!(token.activation_date, activation);
    }

    #[test]
    fn test_custom_validity_window() {
        let token = sample_token();
        let at = token.activation_date + Duration::days(8);

        assert!(token.is_expired(7, at));
        assert!(!token.is_expired(TOKEN_VALIDITY_DAYS, at));
        assert_eq!(token.remaining_days(7, at), -1);
    }

    #[test]
    fn test_token_serialization() {
        let token = sample_token();

        let json = serde_json::to_string(&token).unwrap();
        let deserialized: AccessToken = serde_json::from_str(&json).unwrap();

        assert_eq!(token, deserialized);
    }
}
