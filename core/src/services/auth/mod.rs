//! Authentication service module
//!
//! Email/password registration and login, bearer token logout, and lookup
//! of the user behind a token.

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{BcryptHasher, PasswordHasher, MAX_COST, MIN_COST};
pub use service::AuthService;
