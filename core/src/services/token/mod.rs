//! Token service module for bearer token management
//!
//! - HS256 JWT issuance with a persisted record per token
//! - Verification against signature, lifetime and revocation state
//! - Revocation on logout

mod config;
mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
