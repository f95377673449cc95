//! User repository trait defining the interface for credential persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations own the email uniqueness invariant: `create` must reject
/// a second user with the same email with `AuthError::EmailAlreadyTaken`,
/// even when two registrations race.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that id
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user and return it with its assigned id
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
