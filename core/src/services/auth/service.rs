//! Main authentication service implementation

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;
use validator::Validate;

use crate::domain::entities::user::{NewUser, User};
use crate::domain::value_objects::{
    first_violation, AuthContext, LoggedInUser, LoginUser, RegisterUser, RegisteredUser,
    RuleMessage,
};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{BcryptHasher, PasswordHasher};

/// Authentication service for registration, login and logout
pub struct AuthService<U, T, H = BcryptHasher>
where
    U: UserRepository,
    T: TokenRepository,
    H: PasswordHasher,
{
    /// User repository for credential persistence
    user_repository: Arc<U>,
    /// Token service for bearer token management
    token_service: Arc<TokenService<T>>,
    hasher: H,
    config: AuthServiceConfig,
}

impl<U, T, H> AuthService<U, T, H>
where
    U: UserRepository,
    T: TokenRepository,
    H: PasswordHasher,
{
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        hasher: H,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            hasher,
            config,
        }
    }

    pub fn token_service(&self) -> &Arc<TokenService<T>> {
        &self.token_service
    }

    /// Register a new user and issue their first token
    ///
    /// Rules are checked field by field (name, email, password) and the first
    /// failing rule is reported. Email uniqueness is checked after the email
    /// format rules and before any password rule.
    ///
    /// # Returns
    ///
    /// * `Ok(RegisteredUser)` - Echoed name and email plus the bearer token
    /// * `Err(DomainError::Validation)` - A rule failed or the email is taken
    pub async fn register(&self, command: RegisterUser) -> DomainResult<RegisteredUser> {
        let violations = command.validate().err();
        if let Some(message) = first_violation(violations.as_ref(), &["name", "email"]) {
            return Err(DomainError::validation(message));
        }

        let name = required(command.name.as_deref(), "name")?;
        let email = required(command.email.as_deref(), "email")?;

        if self.user_repository.exists_by_email(email).await? {
            tracing::info!(event = "registration_rejected", reason = "email_taken", "Email already registered");
            return Err(DomainError::validation(RuleMessage::taken("email")));
        }

        if let Some(message) = first_violation(violations.as_ref(), &["password"]) {
            return Err(DomainError::validation(message));
        }
        if !command.is_confirmed() {
            return Err(DomainError::validation(RuleMessage::confirmed("password")));
        }
        let password = required(command.password.as_deref(), "password")?;

        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: self.hasher.hash(password).await?,
            remember_token: Some(self.remember_token()),
        };

        let user = self
            .user_repository
            .create(new_user)
            .await
            .map_err(|e| match e {
                DomainError::Auth(AuthError::EmailAlreadyTaken) => {
                    DomainError::validation(RuleMessage::taken("email"))
                }
                other => other,
            })?;

        let issued = self.token_service.issue(user.id, self.config.token_kind).await?;

        tracing::info!(user_id = user.id, event = "user_registered", "Registered new user");

        Ok(RegisteredUser {
            user_id: user.id,
            name: user.name,
            email: user.email,
            token: issued.access_token,
        })
    }

    /// Check credentials and issue a new token
    ///
    /// # Returns
    ///
    /// * `Ok(LoggedInUser)` - Email plus the bearer token
    /// * `Err(AuthError::UserNotFound)` - No user with that email
    /// * `Err(AuthError::PasswordMismatch)` - Wrong password
    /// * `Err(DomainError::Validation)` - Malformed input
    pub async fn login(&self, command: LoginUser) -> DomainResult<LoggedInUser> {
        let violations = command.validate().err();
        if let Some(message) = first_violation(violations.as_ref(), &["email", "password"]) {
            return Err(DomainError::validation(message));
        }

        let email = required(command.email.as_deref(), "email")?;
        let password = required(command.password.as_deref(), "password")?;

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.hasher.verify(password, &user.password).await? {
            tracing::warn!(user_id = user.id, event = "login_failed", "Password mismatch");
            return Err(AuthError::PasswordMismatch.into());
        }

        let issued = self.token_service.issue(user.id, self.config.token_kind).await?;

        tracing::info!(user_id = user.id, event = "user_logged_in", "User logged in");

        Ok(LoggedInUser {
            user_id: user.id,
            email: email.to_string(),
            token: issued.access_token,
        })
    }

    /// Revoke the token that authenticated this request
    pub async fn logout(&self, context: &AuthContext) -> DomainResult<()> {
        self.token_service.revoke(context.token_id).await?;

        tracing::info!(user_id = context.user_id, event = "user_logged_out", "User logged out");
        Ok(())
    }

    /// The user behind an authenticated request
    pub async fn current_user(&self, context: &AuthContext) -> DomainResult<User> {
        self.user_repository
            .find_by_id(context.user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    fn remember_token(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.config.remember_token_length)
            .map(char::from)
            .collect()
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> DomainResult<&'a str> {
    value.ok_or_else(|| DomainError::validation(RuleMessage::required(field)))
}
