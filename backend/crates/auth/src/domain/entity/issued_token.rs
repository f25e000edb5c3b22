//! Issued Token Entity
//!
//! The session token handed to a user, persisted so that a later login can
//! return it again while it is still valid.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::user_id::UserId;

/// A stored token is only handed out again if it has at least this many
/// seconds of validity left.
pub const REUSE_MIN_REMAINING_SECS: i64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub user_id: UserId,
    /// Encoded, signed token
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whether login may return this token instead of issuing a new one.
    pub fn is_reusable_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - now > Duration::seconds(REUSE_MIN_REMAINING_SECS)
    }

    /// Seconds of validity left, zero once expired.
    pub fn expires_in_at(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }

    pub fn expires_in(&self) -> i64 {
        self.expires_in_at(Utc::now())
    }
}
