use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use libris_core::domain::entities::book::{Book, NewBook};
use libris_core::errors::DomainError;
use libris_core::repositories::BookRepository;

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    inner: RwLock<Books>,
}

#[derive(Debug, Default)]
struct Books {
    rows: BTreeMap<i64, Book>,
    last_id: i64,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, DomainError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, DomainError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, book: NewBook) -> Result<Book, DomainError> {
        let mut books = self.inner.write().await;
        books.last_id += 1;
        let book = book.into_book(books.last_id);
        books.rows.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, book: Book) -> Result<Option<Book>, DomainError> {
        let mut books = self.inner.write().await;
        match books.rows.get_mut(&book.id) {
            Some(existing) => {
                existing.name = book.name;
                existing.desc = book.desc;
                existing.updated_at = book.updated_at;
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}
