//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub name: String,

    /// Unique across all users
    pub email: String,

    /// bcrypt hash, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Random value set at registration, never serialized
    #[serde(skip_serializing, default)]
    pub remember_token: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a user; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub remember_token: Option<String>,
}

impl NewUser {
    /// Materialize the row the store will hold under `id`
    pub fn into_user(self, id: i64) -> User {
        let now = Utc::now();
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            remember_token: self.remember_token,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_are_not_serialized() {
        let user = NewUser {
            name: "Feliciano".to_string(),
            email: "fel@gmail.com".to_string(),
            password: "$2b$04$hash".to_string(),
            remember_token: Some("abcdefghij".to_string()),
        }
        .into_user(1);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "fel@gmail.com");
        assert!(json.get("password").is_none());
        assert!(json.get("remember_token").is_none());
    }
}
