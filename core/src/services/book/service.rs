//! CRUD over the book catalogue

use std::sync::Arc;
use validator::Validate;

use crate::domain::entities::book::{Book, NewBook};
use crate::domain::value_objects::{first_violation, BookInput, RuleMessage};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::BookRepository;

/// Message carried by `DomainError::Internal` when listing fails
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching the books";

const RESOURCE: &str = "Book";

pub struct BookService<B: BookRepository> {
    repository: Arc<B>,
}

impl<B: BookRepository> BookService<B> {
    pub fn new(repository: Arc<B>) -> Self {
        Self { repository }
    }

    /// All books; any store failure becomes `Internal` with a fixed message
    pub async fn list(&self) -> DomainResult<Vec<Book>> {
        self.repository.list().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch books");
            DomainError::internal(FETCH_FAILED_MESSAGE)
        })
    }

    pub async fn create(&self, input: BookInput) -> DomainResult<Book> {
        let (name, desc) = validated(input)?;

        let book = self
            .repository
            .create(NewBook {
                name,
                desc: desc.flatten(),
            })
            .await?;

        tracing::info!(book_id = book.id, event = "book_created", "Created book");
        Ok(book)
    }

    pub async fn get(&self, id: i64) -> DomainResult<Book> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    /// Update name and desc of an existing book
    ///
    /// Existence is checked before the input is validated, so an unknown id
    /// is reported as not found even when the payload is invalid.
    pub async fn update(&self, id: i64, input: BookInput) -> DomainResult<Book> {
        let mut book = self.get(id).await?;
        let (name, desc) = validated(input)?;

        book.apply(name, desc);

        let book = self
            .repository
            .update(book)
            .await?
            .ok_or_else(|| DomainError::not_found(RESOURCE))?;

        tracing::info!(book_id = book.id, event = "book_updated", "Updated book");
        Ok(book)
    }

    pub async fn destroy(&self, id: i64) -> DomainResult<()> {
        let book = self.get(id).await?;

        if !self.repository.delete(book.id).await? {
            return Err(DomainError::not_found(RESOURCE));
        }

        tracing::info!(book_id = id, event = "book_deleted", "Deleted book");
        Ok(())
    }
}

fn validated(input: BookInput) -> DomainResult<(String, Option<Option<String>>)> {
    let violations = input.validate().err();
    if let Some(message) = first_violation(violations.as_ref(), &["name"]) {
        return Err(DomainError::validation(message));
    }

    let name = input
        .name
        .ok_or_else(|| DomainError::validation(RuleMessage::required("name")))?;
    Ok((name, input.desc))
}
