//! Configuration for the authentication service

use libris_shared::AuthConfig;

use crate::domain::entities::token::TokenKind;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Kind of token handed out by register and login
    pub token_kind: TokenKind,
    /// Length of the random remember token stored on new users
    pub remember_token_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            token_kind: TokenKind::PersonalAccess,
            remember_token_length: 10,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        let defaults = Self::default();
        let token_kind = config.issued_token_kind.parse().unwrap_or_else(|error| {
            tracing::warn!(%error, "Falling back to {} tokens", defaults.token_kind.as_str());
            defaults.token_kind
        });

        Self {
            token_kind,
            ..defaults
        }
    }
}
