//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use libris_core::domain::entities::user::{NewUser, User};
use libris_core::errors::{AuthError, DomainError};
use libris_core::repositories::UserRepository;

use super::{column_error, inserted_id, query_error};

const SELECT_USER: &str = r#"
    SELECT id, name, email, password, remember_token, created_at, updated_at
    FROM users
"#;

/// MySQL implementation of UserRepository
///
/// Email uniqueness is enforced by the `users_email_unique` index.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(column_error("id"))?,
            name: row.try_get("name").map_err(column_error("name"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            password: row.try_get("password").map_err(column_error("password"))?,
            remember_token: row
                .try_get("remember_token")
                .map_err(column_error("remember_token"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_USER))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("Failed to find user by id"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE email = ?", SELECT_USER))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("Failed to find user by email"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password, remember_token, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.remember_token)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return DomainError::Auth(AuthError::EmailAlreadyTaken);
                }
            }
            query_error("Failed to create user")(e)
        })?;

        let id = inserted_id(result.last_insert_id())?;
        self.find_by_id(id).await?.ok_or_else(|| DomainError::Internal {
            message: format!("User {} vanished after insert", id),
        })
    }
}
