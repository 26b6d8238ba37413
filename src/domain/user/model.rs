//! User domain entity

use chrono::{DateTime, Utc};

/// An operator account
#[derive(Debug, Clone)]
pub struct User {
    /// UUID string
    pub id: String,
    /// Unique login name
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// New account with a generated id and the current time.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}
