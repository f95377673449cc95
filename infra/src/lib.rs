//! # Infrastructure Layer
//!
//! Concrete implementations of the repository traits defined in `libris_core`.
//!
//! - **Database**: MySQL implementations using SQLx, plus the pooled connection
//!   wrapper and schema migrations
//! - **Memory**: process-local implementations for development and tests

pub mod database;
pub mod memory;

pub use database::{DatabasePool, MySqlBookRepository, MySqlTokenRepository, MySqlUserRepository};
pub use memory::{MemoryBookRepository, MemoryHealth, MemoryTokenRepository, MemoryUserRepository};

use libris_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
