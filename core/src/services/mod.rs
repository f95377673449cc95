//! Business services containing domain logic and use cases.

pub mod auth;
pub mod book;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, BcryptHasher, PasswordHasher};
pub use book::BookService;
pub use token::{TokenService, TokenServiceConfig};
