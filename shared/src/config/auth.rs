//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "change-me-in-production";

/// Token signing, token lifetimes and password hashing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,

    /// `iss` claim
    pub issuer: String,

    /// `aud` claim
    pub audience: String,

    /// Lifetime of standard tokens in days
    pub token_ttl_days: i64,

    /// Lifetime of personal access tokens in months
    pub personal_access_token_ttl_months: u32,

    /// Kind of token issued on register and login: `personal_access` or `standard`
    pub issued_token_kind: String,

    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_SECRET),
            issuer: String::from("libris"),
            audience: String::from("libris-api"),
            token_ttl_days: 15,
            personal_access_token_ttl_months: 6,
            issued_token_kind: String::from("personal_access"),
            bcrypt_cost: 12,
        }
    }
}

impl AuthConfig {
    /// Create a configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
            token_ttl_days: parse_env("TOKEN_TTL_DAYS").unwrap_or(defaults.token_ttl_days),
            personal_access_token_ttl_months: parse_env("PERSONAL_ACCESS_TOKEN_TTL_MONTHS")
                .unwrap_or(defaults.personal_access_token_ttl_months),
            issued_token_kind: std::env::var("ISSUED_TOKEN_KIND")
                .unwrap_or(defaults.issued_token_kind),
            bcrypt_cost: parse_env("BCRYPT_COST").unwrap_or(defaults.bcrypt_cost),
        }
    }

    /// Set the bcrypt cost
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Set the kind of token issued on register and login
    pub fn with_issued_token_kind(mut self, kind: impl Into<String>) -> Self {
        self.issued_token_kind = kind.into();
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
