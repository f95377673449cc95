//! Error kinds for authentication and token management
//!
//! The `Display` text of `AuthError` is returned to clients verbatim by the
//! auth routes, so it must stay stable.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User does not exists")]
    UserNotFound,

    #[error("Password mismatch")]
    PasswordMismatch,

    /// Raised by a store when the unique email index rejects an insert
    #[error("The email has already been taken.")]
    EmailAlreadyTaken,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Unknown token")]
    UnknownToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
