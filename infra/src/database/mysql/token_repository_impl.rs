//! MySQL implementation of the TokenRepository trait.
//!
//! Stores one row per issued access token, keyed by the JWT id, so that
//! logout can revoke a single token.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use libris_core::domain::entities::token::{AccessToken, TokenKind};
use libris_core::errors::DomainError;
use libris_core::repositories::TokenRepository;

use super::{column_error, query_error};

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<AccessToken, DomainError> {
        let id: String = row.try_get("id").map_err(column_error("id"))?;
        let kind: String = row.try_get("kind").map_err(column_error("kind"))?;

        Ok(AccessToken {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid token UUID: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(column_error("user_id"))?,
            name: row.try_get("name").map_err(column_error("name"))?,
            kind: kind
                .parse::<TokenKind>()
                .map_err(|message| DomainError::Internal { message })?,
            revoked: row.try_get("revoked").map_err(column_error("revoked"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(column_error("expires_at"))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save(&self, token: AccessToken) -> Result<AccessToken, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO access_tokens (id, user_id, name, kind, revoked, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(token.id.to_string())
        .bind(token.user_id)
        .bind(&token.name)
        .bind(token.kind.as_str())
        .bind(token.revoked)
        .bind(token.created_at)
        .bind(token.expires_at)
        .execute(&self.pool)
        .await
        .map_err(query_error("Failed to save access token"))?;

        Ok(token)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AccessToken>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, kind, revoked, created_at, expires_at
            FROM access_tokens
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error("Failed to find access token"))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn revoke(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE access_tokens SET revoked = TRUE WHERE id = ? AND revoked = FALSE")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_error("Failed to revoke access token"))?;

        Ok(result.rows_affected() > 0)
    }
}
