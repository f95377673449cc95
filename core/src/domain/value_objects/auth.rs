//! Authentication commands and results.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::rules::{normalize, normalize_secret};

/// Registration request after normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct RegisterUser {
    #[validate(required, length(max = 255, code = "max"))]
    pub name: Option<String>,

    #[validate(required, email, length(max = 255, code = "max"))]
    pub email: Option<String>,

    #[validate(required, length(min = 6, code = "min"))]
    pub password: Option<String>,

    /// Must equal `password`
    pub password_confirmation: Option<String>,
}

impl RegisterUser {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
        password_confirmation: Option<String>,
    ) -> Self {
        Self {
            name: normalize(name),
            email: normalize(email),
            password: normalize_secret(password),
            password_confirmation: normalize_secret(password_confirmation),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.password == self.password_confirmation
    }
}

/// Login request after normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct LoginUser {
    #[validate(required, email, length(max = 255, code = "max"))]
    pub email: Option<String>,

    #[validate(required, length(min = 6, code = "min"))]
    pub password: Option<String>,
}

impl LoginUser {
    pub fn new(email: Option<String>, password: Option<String>) -> Self {
        Self {
            email: normalize(email),
            password: normalize_secret(password),
        }
    }
}

/// Successful registration: the submitted identity plus a fresh bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(skip)]
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedInUser {
    #[serde(skip)]
    pub user_id: i64,
    pub email: String,
    pub token: String,
}

/// Identity established by a verified bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i64,
    pub token_id: Uuid,
}

impl AuthContext {
    pub fn new(user_id: i64, token_id: Uuid) -> Self {
        Self { user_id, token_id }
    }
}
