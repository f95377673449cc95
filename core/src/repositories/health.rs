//! Liveness probe for the backing store.

use async_trait::async_trait;

use crate::errors::DomainError;

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Short name reported by the health endpoint
    fn name(&self) -> &'static str;

    async fn ping(&self) -> Result<(), DomainError>;
}
