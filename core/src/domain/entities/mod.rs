//! Domain entities representing core business objects.

pub mod book;
pub mod token;
pub mod user;

pub use book::{Book, NewBook};
pub use token::{AccessToken, Claims, IssuedToken, TokenKind, JWT_AUDIENCE, JWT_ISSUER};
pub use user::{NewUser, User};
