//! In-memory repository implementations
//!
//! Backed by `tokio::sync::RwLock` maps. Every operation takes the lock once,
//! so each call is atomic on its own, matching the single-row guarantees of
//! the MySQL implementations.

mod book_repository;
mod token_repository;
mod user_repository;

pub use book_repository::MemoryBookRepository;
pub use token_repository::MemoryTokenRepository;
pub use user_repository::MemoryUserRepository;

use async_trait::async_trait;
use libris_core::errors::DomainError;
use libris_core::repositories::HealthCheck;

/// Health probe for the in-memory store; always healthy
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryHealth;

#[async_trait]
impl HealthCheck for MemoryHealth {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
