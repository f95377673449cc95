//! Repository interfaces implemented by the infrastructure layer.

pub mod book;
pub mod health;
pub mod token;
pub mod user;

pub use book::BookRepository;
pub use health::HealthCheck;
pub use token::TokenRepository;
pub use user::UserRepository;
