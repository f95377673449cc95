//! Configuration for the token service

use jsonwebtoken::Algorithm;
use libris_shared::AuthConfig;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    pub issuer: String,
    pub audience: String,
    /// Name stored on every issued token record
    pub token_name: String,
    /// Standard token expiry in days
    pub standard_ttl_days: i64,
    /// Personal access token expiry in months
    pub personal_access_ttl_months: u32,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
            token_name: "All Yours".to_string(),
            standard_ttl_days: 15,
            personal_access_ttl_months: 6,
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            standard_ttl_days: config.token_ttl_days,
            personal_access_ttl_months: config.personal_access_token_ttl_months,
            ..Default::default()
        }
    }
}
