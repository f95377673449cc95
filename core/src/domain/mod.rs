//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{AccessToken, Book, Claims, IssuedToken, NewBook, NewUser, TokenKind, User};
pub use value_objects::{
    AuthContext, BookInput, LoggedInUser, LoginUser, RegisterUser, RegisteredUser,
};
