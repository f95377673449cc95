//! # Libris Core
//!
//! Core business logic and domain layer for the Libris backend.
//! This crate contains domain entities, validated commands, business services,
//! repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{BookRepository, HealthCheck, TokenRepository, UserRepository};
pub use services::{
    AuthService, AuthServiceConfig, BcryptHasher, BookService, PasswordHasher, TokenService,
    TokenServiceConfig,
};
