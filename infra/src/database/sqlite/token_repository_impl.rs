//! SQLite implementation of the TokenRepository trait.
//!
//! Concrete token persistence using SQLite with SQLx. Activation dates are
//! stored as RFC 3339 text with an explicit UTC offset, so a stored value
//! always parses back without timezone ambiguity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use tv_core::domain::entities::token::AccessToken;
use tv_core::errors::DomainError;
use tv_core::repositories::TokenRepository;

/// SQLite implementation of TokenRepository
///
/// Each method is one atomic, committed operation; the pool hands out a
/// connection per call and reclaims it on every exit path.
pub struct SqliteTokenRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteTokenRepository {
    /// Create a new SQLite token repository
    ///
    /// # Arguments
    /// * `pool` - SQLite connection pool from SQLx
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Parse a stored activation date back into a UTC instant
    fn parse_activation_date(raw: &str) -> Result<DateTime<Utc>, DomainError> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| DomainError::Internal {
                message: format!("Invalid stored activation date '{}': {}", raw, e),
            })
    }

    /// Convert a database row to an AccessToken entity
    fn row_to_token(row: &SqliteRow) -> Result<AccessToken, DomainError> {
        let activation_raw: String =
            row.try_get("activation_date")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get activation_date: {}", e),
                })?;

        Ok(AccessToken {
            guid: row.try_get("guid").map_err(|e| DomainError::Internal {
                message: format!("Failed to get guid: {}", e),
            })?,
            token: row.try_get("token").map_err(|e| DomainError::Internal {
                message: format!("Failed to get token: {}", e),
            })?,
            group_guid: row
                .try_get("group_guid")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get group_guid: {}", e),
                })?,
            activation_date: Self::parse_activation_date(&activation_raw)?,
        })
    }
}

#[async_trait]
impl TokenRepository for SqliteTokenRepository {
    async fn insert(&self, token: AccessToken) -> Result<AccessToken, DomainError> {
        // Name the conflicting field up front; the UNIQUE constraints below
        // remain the backstop for concurrent issuance.
        let check_query = r#"
            SELECT
                EXISTS(SELECT 1 FROM tokens WHERE guid = ?) AS guid_taken,
                EXISTS(SELECT 1 FROM tokens WHERE token = ?) AS token_taken
        "#;
        let check_row = sqlx::query(check_query)
            .bind(&token.guid)
            .bind(&token.token)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::StorageUnavailable {
                message: format!("Failed to check token existence: {}", e),
            })?;

        let guid_taken: i64 = check_row
            .try_get("guid_taken")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get existence result: {}", e),
            })?;
        let token_taken: i64 = check_row
            .try_get("token_taken")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get existence result: {}", e),
            })?;

        if guid_taken == 1 {
            return Err(DomainError::DuplicateKey {
                field: "guid".to_string(),
            });
        }
        if token_taken == 1 {
            return Err(DomainError::DuplicateKey {
                field: "token".to_string(),
            });
        }

        let query = r#"
            INSERT INTO tokens (guid, token, group_guid, activation_date)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&token.guid)
            .bind(&token.token)
            .bind(&token.group_guid)
            .bind(token.activation_date.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DomainError::DuplicateKey {
                        field: "guid or token".to_string(),
                    }
                }
                _ => DomainError::StorageUnavailable {
                    message: format!("Failed to insert token: {}", e),
                },
            })?;

        Ok(token)
    }

    async fn find_by_guid(&self, guid: &str) -> Result<Option<AccessToken>, DomainError> {
        let query = r#"
            SELECT guid, token, group_guid, activation_date
            FROM tokens
            WHERE guid = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(guid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::StorageUnavailable {
                message: format!("Failed to find token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_activation(
        &self,
        guid: &str,
        at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE tokens SET activation_date = ?
            WHERE guid = ?
        "#;

        let result = sqlx::query(query)
            .bind(at.to_rfc3339())
            .bind(guid)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StorageUnavailable {
                message: format!("Failed to update activation date: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_group(&self, guid: &str, new_group_guid: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE tokens SET group_guid = ?
            WHERE guid = ?
        "#;

        let result = sqlx::query(query)
            .bind(new_group_guid)
            .bind(guid)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StorageUnavailable {
                message: format!("Failed to update group: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, guid: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM tokens WHERE guid = ?")
            .bind(guid)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StorageUnavailable {
                message: format!("Failed to delete token: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<AccessToken>, DomainError> {
        let rows = sqlx::query("SELECT guid, token, group_guid, activation_date FROM tokens")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::StorageUnavailable {
                message: format!("Failed to list tokens: {}", e),
            })?;

        let mut tokens = Vec::new();
        for row in rows {
            tokens.push(Self::row_to_token(&row)?);
        }

        Ok(tokens)
    }
}
