//! Main token lifecycle service implementation

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::entities::token::AccessToken;
use crate::domain::value_objects::token_info::TokenInfo;
use crate::errors::DomainError;
use crate::repositories::TokenRepository;

use super::config::TokenPolicyConfig;

/// Service for managing the access token lifecycle
///
/// Owns the expiration policy (validity window) and delegates persistence to
/// the repository. Every method is one independent request/response call;
/// nothing is cached between calls.
pub struct TokenService<R: TokenRepository> {
    repository: R,
    config: TokenPolicyConfig,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for persistence
    /// * `config` - Lifecycle policy configuration
    pub fn new(repository: R, config: TokenPolicyConfig) -> Self {
        Self { repository, config }
    }

    /// Issues a new token for a user
    ///
    /// The activation date is set to the current instant, opening a fresh
    /// validity window.
    ///
    /// # Arguments
    ///
    /// * `guid` - The owning user's identifier
    /// * `token` - The opaque credential value supplied by the caller
    /// * `group_guid` - The group to associate the token with
    ///
    /// # Returns
    ///
    /// The stored record, or `DomainError::DuplicateKey` if the guid or token
    /// value is already present.
    pub async fn issue(
        &self,
        guid: String,
        token: String,
        group_guid: String,
    ) -> Result<AccessToken, DomainError> {
        let record = AccessToken::new(guid, token, group_guid);
        let saved = self.repository.insert(record).await?;

        info!(guid = %saved.guid, group_guid = %saved.group_guid, "issued access token");
        Ok(saved)
    }

    /// Renews a token, resetting its activation clock to now
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a record was renewed, `Ok(false)` if the guid has no
    /// record (the call is a silent no-op).
    pub async fn renew(&self, guid: &str) -> Result<bool, DomainError> {
        let renewed = self.repository.update_activation(guid, Utc::now()).await?;

        if renewed {
            info!(guid = %guid, "renewed access token");
        } else {
            debug!(guid = %guid, "renew on unknown guid, no-op");
        }
        Ok(renewed)
    }

    /// Re-associates a token with a different group
    ///
    /// Only the group association changes; the token value and activation
    /// date are untouched.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a record was updated, `Ok(false)` if the guid has no
    /// record (the call is a silent no-op).
    pub async fn reassign_group(
        &self,
        guid: &str,
        new_group_guid: &str,
    ) -> Result<bool, DomainError> {
        let updated = self.repository.update_group(guid, new_group_guid).await?;

        if updated {
            info!(guid = %guid, group_guid = %new_group_guid, "reassigned token group");
        } else {
            debug!(guid = %guid, "group reassignment on unknown guid, no-op");
        }
        Ok(updated)
    }

    /// Deletes a token record
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a record was removed, `Ok(false)` if the guid had none.
    pub async fn delete(&self, guid: &str) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(guid).await?;

        if deleted {
            info!(guid = %guid, "deleted access token");
        } else {
            debug!(guid = %guid, "delete on unknown guid, no-op");
        }
        Ok(deleted)
    }

    /// Reports a token's validity as of now
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the guid has no record; this is absence, not an error.
    pub async fn get_info(&self, guid: &str) -> Result<Option<TokenInfo>, DomainError> {
        match self.repository.find_by_guid(guid).await? {
            Some(token) => Ok(Some(TokenInfo::from_token(
                &token,
                self.config.validity_days,
                Utc::now(),
            ))),
            None => Ok(None),
        }
    }

    /// Reads every token record in storage
    pub async fn list_all(&self) -> Result<Vec<AccessToken>, DomainError> {
        self.repository.list_all().await
    }
}
