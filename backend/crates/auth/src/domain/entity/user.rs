//! User Entity
//!
//! Identity-provider record: who the user is and how they prove it.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_id::UserId};

/// User entity
///
/// Profile data lives in [`Profile`](super::profile::Profile); this only
/// holds what login and token issuance need.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, the token `uid`
    pub user_id: UserId,
    /// Login identifier (unique)
    pub email: Email,
    /// Argon2id hash
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            uid: self.user_id,
            email: self.email.clone(),
        }
    }
}

/// Verified identity attached to an authenticated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub uid: UserId,
    pub email: Email,
}
