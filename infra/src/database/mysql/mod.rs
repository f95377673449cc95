//! MySQL-specific database implementations
//!
//! MySQL implementations of the repository traits using SQLx.

pub mod book_repository_impl;
pub mod token_repository_impl;
pub mod user_repository_impl;

pub use book_repository_impl::MySqlBookRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use libris_core::errors::DomainError;

/// Wrap a driver error with what was being attempted
pub(crate) fn query_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        DomainError::Internal {
            message: format!("{}: {}", context, e),
        }
    }
}

pub(crate) fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("Failed to get {}: {}", column, e),
    }
}

/// Ids come back from the driver as `u64`
pub(crate) fn inserted_id(id: u64) -> Result<i64, DomainError> {
    i64::try_from(id).map_err(|_| DomainError::Internal {
        message: format!("Inserted id {} out of range", id),
    })
}
