use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use libris_core::domain::entities::token::AccessToken;
use libris_core::errors::DomainError;
use libris_core::repositories::TokenRepository;

#[derive(Debug, Default)]
pub struct MemoryTokenRepository {
    tokens: RwLock<HashMap<Uuid, AccessToken>>,
}

impl MemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for MemoryTokenRepository {
    async fn save(&self, token: AccessToken) -> Result<AccessToken, DomainError> {
        self.tokens.write().await.insert(token.id, token.clone());
        Ok(token)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AccessToken>, DomainError> {
        Ok(self.tokens.read().await.get(&id).cloned())
    }

    async fn revoke(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(&id) {
            Some(token) if !token.revoked => {
                token.revoke();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
