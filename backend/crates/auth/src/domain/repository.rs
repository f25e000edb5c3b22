//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::{issued_token::IssuedToken, profile::Profile, user::User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait (the identity provider)
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user. Fails with `EmailTaken` if the email is in use.
    async fn create_user(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_user_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_user_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Delete user. Deleting a missing user is not an error.
    async fn delete_user(&self, user_id: &UserId) -> AuthResult<()>;
}

/// Issued token repository trait, at most one token per user
#[trait_variant::make(TokenRepository: Send)]
pub trait LocalTokenRepository {
    async fn find_token(&self, user_id: &UserId) -> AuthResult<Option<IssuedToken>>;

    /// Insert or replace the user's token
    async fn save_token(&self, token: &IssuedToken) -> AuthResult<()>;

    async fn delete_token(&self, user_id: &UserId) -> AuthResult<()>;

    /// Remove expired tokens, returning how many were removed
    async fn delete_expired_tokens(&self) -> AuthResult<u64>;
}

/// Profile repository trait
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    async fn create_profile(&self, profile: &Profile) -> AuthResult<()>;

    async fn find_profile(&self, user_id: &UserId) -> AuthResult<Option<Profile>>;

    /// Replace the stored document
    async fn save_profile(&self, profile: &Profile) -> AuthResult<()>;

    async fn delete_profile(&self, user_id: &UserId) -> AuthResult<()>;
}
