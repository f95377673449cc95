//! Token repository trait defining the interface for access token records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::AccessToken;
use crate::errors::DomainError;

#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn save(&self, token: AccessToken) -> Result<AccessToken, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AccessToken>, DomainError>;

    /// Mark a token revoked; `false` when no live record matched
    async fn revoke(&self, id: Uuid) -> Result<bool, DomainError>;
}
