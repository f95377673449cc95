//! MySQL implementation of the BookRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use libris_core::domain::entities::book::{Book, NewBook};
use libris_core::errors::DomainError;
use libris_core::repositories::BookRepository;

use super::{column_error, inserted_id, query_error};

const SELECT_BOOK: &str = "SELECT id, name, `desc`, created_at, updated_at FROM books";

pub struct MySqlBookRepository {
    pool: MySqlPool,
}

impl MySqlBookRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_book(row: &sqlx::mysql::MySqlRow) -> Result<Book, DomainError> {
        Ok(Book {
            id: row.try_get("id").map_err(column_error("id"))?,
            name: row.try_get("name").map_err(column_error("name"))?,
            desc: row.try_get("desc").map_err(column_error("desc"))?,
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
impl BookRepository for MySqlBookRepository {
    async fn list(&self) -> Result<Vec<Book>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_BOOK))
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("Failed to list books"))?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_BOOK))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("Failed to find book"))?;

        row.as_ref().map(Self::row_to_book).transpose()
    }

    async fn create(&self, book: NewBook) -> Result<Book, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO books (name, `desc`, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&book.name)
        .bind(&book.desc)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(query_error("Failed to create book"))?;

        let id = inserted_id(result.last_insert_id())?;
        self.find_by_id(id).await?.ok_or_else(|| DomainError::Internal {
            message: format!("Book {} vanished after insert", id),
        })
    }

    async fn update(&self, book: Book) -> Result<Option<Book>, DomainError> {
        sqlx::query("UPDATE books SET name = ?, `desc` = ?, updated_at = ? WHERE id = ?")
            .bind(&book.name)
            .bind(&book.desc)
            .bind(book.updated_at)
            .bind(book.id)
            .execute(&self.pool)
            .await
            .map_err(query_error("Failed to update book"))?;

        // rows_affected is zero for unchanged rows too, so existence comes from a re-read
        self.find_by_id(book.id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error("Failed to delete book"))?;

        Ok(result.rows_affected() > 0)
    }
}
