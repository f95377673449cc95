//! Value objects: validated commands, operation results and the
//! authenticated identity.

pub mod auth;
pub mod book;
pub mod rules;

pub use auth::{AuthContext, LoggedInUser, LoginUser, RegisterUser, RegisteredUser};
pub use book::BookInput;
pub use rules::{first_violation, RuleMessage};
