//! In-Memory Repository Implementation
//!
//! Process-local storage with the same semantics as the PostgreSQL
//! repository. Used by tests and for running the API without a database.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::{issued_token::IssuedToken, profile::Profile, user::User};
use crate::domain::repository::{ProfileRepository, TokenRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    tokens: HashMap<UserId, IssuedToken>,
    profiles: HashMap<UserId, Profile>,
}

/// In-memory auth repository. Clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create_user(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        tables.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.tables.read().await.users.get(user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| &u.email == email).cloned())
    }

    async fn delete_user(&self, user_id: &UserId) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        // Mirrors ON DELETE CASCADE
        tables.users.remove(user_id);
        tables.tokens.remove(user_id);
        tables.profiles.remove(user_id);
        Ok(())
    }
}

impl TokenRepository for InMemoryAuthRepository {
    async fn find_token(&self, user_id: &UserId) -> AuthResult<Option<IssuedToken>> {
        Ok(self.tables.read().await.tokens.get(user_id).cloned())
    }

    async fn save_token(&self, token: &IssuedToken) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&token.user_id) {
            return Err(AuthError::UserNotFound);
        }
        tables.tokens.insert(token.user_id, token.clone());
        Ok(())
    }

    async fn delete_token(&self, user_id: &UserId) -> AuthResult<()> {
        self.tables.write().await.tokens.remove(user_id);
        Ok(())
    }

    async fn delete_expired_tokens(&self) -> AuthResult<u64> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        let before = tables.tokens.len();
        tables.tokens.retain(|_, token| !token.is_expired_at(now));
        Ok((before - tables.tokens.len()) as u64)
    }
}

impl ProfileRepository for InMemoryAuthRepository {
    async fn create_profile(&self, profile: &Profile) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&profile.user_id) {
            return Err(AuthError::UserNotFound);
        }
        if tables.profiles.contains_key(&profile.user_id) {
            return Err(AuthError::Internal("profile already exists".to_string()));
        }
        tables.profiles.insert(profile.user_id, profile.clone());
        Ok(())
    }

    async fn find_profile(&self, user_id: &UserId) -> AuthResult<Option<Profile>> {
        Ok(self.tables.read().await.profiles.get(user_id).cloned())
    }

    async fn save_profile(&self, profile: &Profile) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        match tables.profiles.get_mut(&profile.user_id) {
            Some(stored) => {
                *stored = profile.clone();
                Ok(())
            }
            None => Err(AuthError::ProfileNotFound),
        }
    }

    async fn delete_profile(&self, user_id: &UserId) -> AuthResult<()> {
        self.tables.write().await.profiles.remove(user_id);
        Ok(())
    }
}
