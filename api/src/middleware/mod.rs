pub mod auth;
pub mod cors;

pub use auth::{Authenticated, BearerAuth, TokenVerifier};
pub use cors::create_cors;
