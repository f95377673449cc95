//! Request bodies accepted by the HTTP routes
//!
//! Every field is optional at the wire level so that a missing field is
//! reported by the domain rules ("The name field is required.") instead of
//! failing deserialization.

pub mod auth;
pub mod book;

pub use auth::{LoginRequest, RegisterRequest};
pub use book::BookRequest;
