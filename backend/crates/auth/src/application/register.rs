//! Register Use Case
//!
//! Creates a user, their profile document and a first session token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::{
    profile::{Profile, ProfileDetails},
    user::User,
};
use crate::domain::repository::{ProfileRepository, TokenRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub password: String,
    /// Questionnaire answers; `details.email` is also the login identifier
    pub details: ProfileDetails,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub access_token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

/// Register use case
pub struct RegisterUseCase<U, P, T>
where
    U: UserRepository,
    P: ProfileRepository,
    T: TokenRepository,
{
    user_repo: Arc<U>,
    profile_repo: Arc<P>,
    token_repo: Arc<T>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U, P, T> RegisterUseCase<U, P, T>
where
    U: UserRepository,
    P: ProfileRepository,
    T: TokenRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        profile_repo: Arc<P>,
        token_repo: Arc<T>,
        tokens: Arc<TokenService>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            token_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        input.details.validate()?;
        let password = ClearTextPassword::new(input.password)?;

        let email = input.details.email.clone();
        if self.user_repo.find_user_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = password.hash(self.config.pepper())?;
        let user = User::new(email, password_hash);
        self.user_repo.create_user(&user).await?;

        let profile = Profile::new(user.user_id, input.details);
        if let Err(e) = self.profile_repo.create_profile(&profile).await {
            // Do not leave an account without a profile behind
            if let Err(cleanup) = self.user_repo.delete_user(&user.user_id).await {
                tracing::error!(
                    user_id = %user.user_id,
                    error = %cleanup,
                    "Failed to remove user after profile creation failed"
                );
            }
            return Err(e);
        }

        let issued = self.tokens.issue(&user)?;
        self.token_repo.save_token(&issued).await?;

        tracing::info!(
            user_id = %user.user_id,
            goal = %profile.details.goal,
            "User registered"
        );

        Ok(RegisterOutput {
            expires_in: issued.expires_in(),
            access_token: issued.token,
        })
    }
}
