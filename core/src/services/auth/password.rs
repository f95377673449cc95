//! Password hashing

use async_trait::async_trait;

use crate::errors::DomainError;

/// One-way password hashing used for registration and login
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}

pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// bcrypt hasher; hashing runs on the blocking pool
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Password check task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password check failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = BcryptHasher::new(MIN_COST);
        let hash = hasher.hash("fel123_321").await.unwrap();

        assert_ne!(hash, "fel123_321");
        assert!(hasher.verify("fel123_321", &hash).await.unwrap());
        assert!(!hasher.verify("wrong-pass", &hash).await.unwrap());
    }

    #[test]
    fn test_cost_is_clamped() {
        assert_eq!(BcryptHasher::new(1).cost(), MIN_COST);
        assert_eq!(BcryptHasher::new(99).cost(), MAX_COST);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_internal_error() {
        let hasher = BcryptHasher::new(MIN_COST);
        let result = hasher.verify("secret", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
