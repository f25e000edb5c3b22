//! Profile Use Cases
//!
//! Read, partially update and remove the authenticated user's data.

use std::sync::Arc;

use crate::domain::entity::profile::{Profile, ProfilePatch};
use crate::domain::repository::{ProfileRepository, TokenRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Get profile use case
pub struct GetProfileUseCase<P>
where
    P: ProfileRepository,
{
    profile_repo: Arc<P>,
}

impl<P> GetProfileUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profile_repo: Arc<P>) -> Self {
        Self { profile_repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<Profile> {
        self.profile_repo
            .find_profile(user_id)
            .await?
            .ok_or(AuthError::ProfileNotFound)
    }
}

/// Update profile use case
pub struct UpdateProfileUseCase<P>
where
    P: ProfileRepository,
{
    profile_repo: Arc<P>,
}

impl<P> UpdateProfileUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profile_repo: Arc<P>) -> Self {
        Self { profile_repo }
    }

    /// Merge `patch` into the stored profile and return the result.
    pub async fn execute(&self, user_id: &UserId, patch: ProfilePatch) -> AuthResult<Profile> {
        let mut profile = self
            .profile_repo
            .find_profile(user_id)
            .await?
            .ok_or(AuthError::ProfileNotFound)?;

        profile.apply(patch)?;
        self.profile_repo.save_profile(&profile).await?;

        tracing::debug!(user_id = %user_id, "Profile updated");
        Ok(profile)
    }
}

/// Delete account use case
///
/// Removes the profile, then the stored token, then the user record.
pub struct DeleteAccountUseCase<U, P, T>
where
    U: UserRepository,
    P: ProfileRepository,
    T: TokenRepository,
{
    user_repo: Arc<U>,
    profile_repo: Arc<P>,
    token_repo: Arc<T>,
}

impl<U, P, T> DeleteAccountUseCase<U, P, T>
where
    U: UserRepository,
    P: ProfileRepository,
    T: TokenRepository,
{
    pub fn new(user_repo: Arc<U>, profile_repo: Arc<P>, token_repo: Arc<T>) -> Self {
        Self {
            user_repo,
            profile_repo,
            token_repo,
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<()> {
        if self.profile_repo.find_profile(user_id).await?.is_none() {
            return Err(AuthError::ProfileNotFound);
        }

        self.profile_repo.delete_profile(user_id).await?;
        self.token_repo.delete_token(user_id).await?;
        self.user_repo.delete_user(user_id).await?;

        tracing::info!(user_id = %user_id, "Account deleted");
        Ok(())
    }
}
