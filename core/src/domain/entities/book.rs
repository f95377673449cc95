//! Book entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalogue entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub desc: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Apply validated changes; `desc` is only replaced when it was supplied
    pub fn apply(&mut self, name: String, desc: Option<Option<String>>) {
        self.name = name;
        if let Some(desc) = desc {
            self.desc = desc;
        }
        self.updated_at = Utc::now();
    }
}

/// Data required to insert a book; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub name: String,
    pub desc: Option<String>,
}

impl NewBook {
    pub fn into_book(self, id: i64) -> Book {
        let now = Utc::now();
        Book {
            id,
            name: self.name,
            desc: self.desc,
            created_at: now,
            updated_at: now,
        }
    }
}
