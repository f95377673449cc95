use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use libris_core::domain::entities::user::{NewUser, User};
use libris_core::errors::{AuthError, DomainError};
use libris_core::repositories::UserRepository;

/// In-memory users, with emails compared case-insensitively like the MySQL collation
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    inner: RwLock<Users>,
}

#[derive(Debug, Default)]
struct Users {
    rows: HashMap<i64, User>,
    last_id: i64,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_email(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.inner.read().await;
        Ok(users.rows.values().find(|u| same_email(&u.email, email)).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.inner.write().await;
        if users.rows.values().any(|u| same_email(&u.email, &user.email)) {
            return Err(AuthError::EmailAlreadyTaken.into());
        }

        users.last_id += 1;
        let user = user.into_user(users.last_id);
        users.rows.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Feliciano".to_string(),
            email: email.to_string(),
            password: "hash".to_string(),
            remember_token: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = MemoryUserRepository::new();
        let first = repo.create(new_user("a@example.com")).await.unwrap();
        let second = repo.create(new_user("b@example.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_email_lookup_ignores_case() {
        let repo = MemoryUserRepository::new();
        repo.create(new_user("Fel@Gmail.com")).await.unwrap();

        assert!(repo.find_by_email("fel@gmail.com").await.unwrap().is_some());
        assert!(repo.exists_by_email("FEL@GMAIL.COM").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = MemoryUserRepository::new();
        repo.create(new_user("fel@gmail.com")).await.unwrap();

        let result = repo.create(new_user("FEL@gmail.com")).await;
        assert_eq!(result.unwrap_err(), DomainError::Auth(AuthError::EmailAlreadyTaken));
    }

    #[tokio::test]
    async fn test_concurrent_registrations_keep_one_row() {
        let repo = Arc::new(MemoryUserRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(new_user("race@example.com")).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
    }
}
