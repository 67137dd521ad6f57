//! Token repository trait defining the interface for token persistence.
//!
//! This module defines the repository pattern interface for [`AccessToken`]
//! records. Each call is one atomic, committed operation against the backing
//! store; no operation spans multiple calls or holds storage state between
//! them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::token::AccessToken;
use crate::errors::DomainError;

/// Repository trait for AccessToken persistence operations
///
/// Absence is not an error anywhere on this trait: lookups return `Option`,
/// and mutations on a guid with no record succeed with `Ok(false)` (zero rows
/// affected) rather than failing.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert a new token record
    ///
    /// # Arguments
    /// * `token` - The AccessToken entity to persist
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - The saved record
    /// * `Err(DomainError::DuplicateKey)` - The guid or token value already exists
    /// * `Err(DomainError)` - Storage failure
    ///
    /// # Example
    /// ```no_run
    /// # use tv_core::repositories::TokenRepository;
    /// # use tv_core::domain::entities::token::AccessToken;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let token = AccessToken::new(
    ///     "user_guid_1".to_string(),
    ///     "token_123".to_string(),
    ///     "group_guid_1".to_string(),
    /// );
    ///
    /// let saved = repo.insert(token).await?;
    /// println!("Token issued for {}", saved.guid);
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, token: AccessToken) -> Result<AccessToken, DomainError>;

    /// Find the token record owned by a guid
    ///
    /// # Returns
    /// * `Ok(Some(AccessToken))` - Record found
    /// * `Ok(None)` - No record for this guid
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_guid(&self, guid: &str) -> Result<Option<AccessToken>, DomainError>;

    /// Reset the activation date of the record matching `guid`
    ///
    /// # Arguments
    /// * `guid` - The owning user's identifier
    /// * `at` - The new activation instant
    ///
    /// # Returns
    /// * `Ok(true)` - A record was updated
    /// * `Ok(false)` - No record matched; the call is a no-op
    /// * `Err(DomainError)` - Storage failure
    async fn update_activation(&self, guid: &str, at: DateTime<Utc>) -> Result<bool, DomainError>;

    /// Update the group association of the record matching `guid`
    ///
    /// Touches only `group_guid`; the token value and activation date are
    /// left unchanged.
    ///
    /// # Returns
    /// * `Ok(true)` - A record was updated
    /// * `Ok(false)` - No record matched; the call is a no-op
    /// * `Err(DomainError)` - Storage failure
    async fn update_group(&self, guid: &str, new_group_guid: &str) -> Result<bool, DomainError>;

    /// Remove the record matching `guid`
    ///
    /// # Returns
    /// * `Ok(true)` - A record was deleted
    /// * `Ok(false)` - No record matched; the call is a no-op
    /// * `Err(DomainError)` - Storage failure
    async fn delete(&self, guid: &str) -> Result<bool, DomainError>;

    /// Read every token record in storage
    ///
    /// A fresh one-shot read on each call; row order is whatever the storage
    /// layer yields.
    async fn list_all(&self) -> Result<Vec<AccessToken>, DomainError>;
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token(guid: &str, value: &str, group: &str) -> AccessToken {
        AccessToken::new(guid.to_string(), value.to_string(), group.to_string())
    }

    #[tokio::test]
    async fn test_mock_insert_and_find() {
        let repo = mock::MockTokenRepository::new();

        let saved = repo.insert(token("u1", "t1", "g1")).await.unwrap();
        assert_eq!(saved.guid, "u1");

        let found = repo.find_by_guid("u1").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().token, "t1");

        assert!(repo.find_by_guid("u2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_duplicate_guid() {
        let repo = mock::MockTokenRepository::new();

        repo.insert(token("u1", "t1", "g1")).await.unwrap();
        let result = repo.insert(token("u1", "t2", "g1")).await;

        assert!(matches!(
            result.unwrap_err(),
            DomainError::DuplicateKey { field } if field == "guid"
        ));
    }

    #[tokio::test]
    async fn test_mock_duplicate_token_value() {
        let repo = mock::MockTokenRepository::new();

        repo.insert(token("u1", "t1", "g1")).await.unwrap();
        let result = repo.insert(token("u2", "t1", "g1")).await;

        assert!(matches!(
            result.unwrap_err(),
            DomainError::DuplicateKey { field } if field == "token"
        ));
    }

    #[tokio::test]
    async fn test_mock_update_activation() {
        let repo = mock::MockTokenRepository::new();
        repo.insert(token("u1", "t1", "g1")).await.unwrap();

        let at = Utc::now() - Duration::days(40);
        assert!(repo.update_activation("u1", at).await.unwrap());

        let found = repo.find_by_guid("u1").await.unwrap().unwrap();
        assert_eq!(found.activation_date, at);

        // Missing guid is a silent no-op
        assert!(!repo.update_activation("missing", Utc::now()).await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_update_group_preserves_other_fields() {
        let repo = mock::MockTokenRepository::new();
        let original = repo.insert(token("u1", "t1", "g1")).await.unwrap();

        assert!(repo.update_group("u1", "g2").await.unwrap());

        let found = repo.find_by_guid("u1").await.unwrap().unwrap();
        assert_eq!(found.group_guid, "g2");
        assert_eq!(found.token, original.token);
        assert_eq!(found.activation_date, original.activation_date);

        assert!(!repo.update_group("missing", "g2").await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_delete() {
        let repo = mock::MockTokenRepository::new();
        repo.insert(token("u1", "t1", "g1")).await.unwrap();

        assert!(repo.delete("u1").await.unwrap());
        assert!(repo.find_by_guid("u1").await.unwrap().is_none());

        // Second delete is a no-op
        assert!(!repo.delete("u1").await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_list_all() {
        let repo = mock::MockTokenRepository::new();
        repo.insert(token("u1", "t1", "g1")).await.unwrap();
        repo.insert(token("u2", "t2", "g1")).await.unwrap();
        repo.insert(token("u3", "t3", "g2")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().any(|t| t.guid == "u2" && t.token == "t2"));
    }
}
