//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{AccessToken, Claims, IssuedToken, TokenKind};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Issues, verifies and revokes bearer tokens
///
/// A bearer value is valid iff its JWT verifies and the record named by its
/// `jti` exists, belongs to `sub`, and is neither revoked nor expired.
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a token of `kind` for a user and persist its record
    pub async fn issue(&self, user_id: i64, kind: TokenKind) -> Result<IssuedToken, DomainError> {
        let record = AccessToken::new(
            user_id,
            self.config.token_name.as_str(),
            kind,
            self.config.standard_ttl_days,
            self.config.personal_access_ttl_months,
        );

        let claims = Claims::new(
            user_id,
            record.id,
            record.created_at,
            record.expires_at,
            &self.config.issuer,
            &self.config.audience,
        );

        let access_token = encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!(user_id, error = %e, "Failed to sign access token");
                DomainError::Token(TokenError::TokenGenerationFailed)
            })?;

        let record = self.repository.save(record).await?;

        tracing::debug!(
            user_id,
            token_id = %record.id,
            kind = record.kind.as_str(),
            "Issued access token"
        );

        Ok(IssuedToken {
            access_token,
            token_id: record.id,
            expires_at: record.expires_at,
        })
    }

    /// Verify a bearer value and return its claims
    pub async fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| DomainError::Token(map_jwt_error(e.kind())))?
            .claims;

        let (user_id, token_id) = match (claims.user_id(), claims.token_id()) {
            (Some(user_id), Some(token_id)) => (user_id, token_id),
            _ => return Err(TokenError::InvalidClaims.into()),
        };

        let record = self
            .repository
            .find_by_id(token_id)
            .await?
            .ok_or(TokenError::UnknownToken)?;

        if record.user_id != user_id {
            return Err(TokenError::InvalidClaims.into());
        }
        if record.revoked {
            return Err(TokenError::TokenRevoked.into());
        }
        if record.is_expired() {
            return Err(TokenError::TokenExpired.into());
        }

        Ok(claims)
    }

    /// Revoke the record behind a token id
    pub async fn revoke(&self, token_id: Uuid) -> Result<(), DomainError> {
        let record = self
            .repository
            .find_by_id(token_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Access token"))?;

        if record.revoked {
            return Err(TokenError::TokenRevoked.into());
        }

        // A concurrent logout may win between the read and the write
        if !self.repository.revoke(token_id).await? {
            return Err(TokenError::TokenRevoked.into());
        }

        tracing::info!(user_id = record.user_id, token_id = %token_id, "Revoked access token");
        Ok(())
    }
}

fn map_jwt_error(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience | ErrorKind::MissingRequiredClaim(_) => {
            TokenError::InvalidClaims
        }
        _ => TokenError::InvalidTokenFormat,
    }
}
