//! Book repository trait.

use async_trait::async_trait;

use crate::domain::entities::book::{Book, NewBook};
use crate::errors::DomainError;

/// Single-row operations on the book catalogue
///
/// Each call is atomic on its own; callers compose them without a
/// surrounding transaction.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books in id order
    async fn list(&self) -> Result<Vec<Book>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, DomainError>;

    async fn create(&self, book: NewBook) -> Result<Book, DomainError>;

    /// Overwrite name, desc and updated_at of an existing row
    ///
    /// Returns `None` when the row no longer exists; never inserts.
    async fn update(&self, book: Book) -> Result<Option<Book>, DomainError>;

    /// Remove a row; `false` when it did not exist
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
