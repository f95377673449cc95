//! Token entities for bearer authentication.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT issuer
pub const JWT_ISSUER: &str = "libris";

/// JWT audience
pub const JWT_AUDIENCE: &str = "libris-api";

/// Lifetime class of an issued token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Short lived token, measured in days
    Standard,
    /// Long lived token handed out by register and login, measured in months
    PersonalAccess,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Standard => "standard",
            TokenKind::PersonalAccess => "personal_access",
        }
    }
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(TokenKind::Standard),
            "personal_access" => Ok(TokenKind::PersonalAccess),
            other => Err(format!("Unknown token kind: {}", other)),
        }
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// JWT ID, the id of the matching `AccessToken` record
    pub jti: String,

    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl Claims {
    pub fn new(
        user_id: i64,
        token_id: Uuid,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        issuer: &str,
        audience: &str,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            jti: token_id.to_string(),
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }

    pub fn token_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.jti).ok()
    }
}

/// Persisted record of an issued token, used for revocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub id: Uuid,
    pub user_id: i64,
    pub name: String,
    pub kind: TokenKind,
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a record expiring after `ttl_days` or `ttl_months` depending on `kind`
    pub fn new(
        user_id: i64,
        name: impl Into<String>,
        kind: TokenKind,
        ttl_days: i64,
        ttl_months: u32,
    ) -> Self {
        let now = Utc::now();
        let expires_at = match kind {
            TokenKind::Standard => now + Duration::days(ttl_days),
            TokenKind::PersonalAccess => now
                .checked_add_months(Months::new(ttl_months))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };

        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            kind,
            revoked: false,
            created_at: now,
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub fn revoke(&mut self) {
        self.revoked = true;
    }
}

/// Bearer value handed to the client plus the record it refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_id: Uuid,
    pub expires_at: DateTime<Utc>,
}
