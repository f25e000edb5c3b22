//! Login Use Case
//!
//! Checks email and password, then hands back the user's stored session
//! token if it is still good, or issues a new one.

use std::sync::Arc;

use chrono::Utc;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::{TokenRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub access_token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    /// Whether a previously issued token was returned
    pub reused: bool,
}

/// Login use case
pub struct LoginUseCase<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U, T> LoginUseCase<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        token_repo: Arc<T>,
        tokens: Arc<TokenService>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // A malformed address cannot belong to an account
        let email = Email::new(input.email).map_err(|_| AuthError::UnknownEmail)?;

        let user = self
            .user_repo
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::UnknownEmail)?;

        let password = ClearTextPassword::for_verification(input.password);
        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::WrongPassword);
        }

        let now = Utc::now();
        if let Some(stored) = self.token_repo.find_token(&user.user_id).await? {
            // Tokens signed under a rotated secret or issuer are replaced
            if stored.is_reusable_at(now) && self.tokens.verify(&stored.token).is_ok() {
                tracing::info!(user_id = %user.user_id, "User logged in with stored token");
                return Ok(LoginOutput {
                    expires_in: stored.expires_in_at(now),
                    access_token: stored.token,
                    reused: true,
                });
            }
        }

        let issued = self.tokens.issue(&user)?;
        self.token_repo.save_token(&issued).await?;

        tracing::info!(user_id = %user.user_id, "User logged in with new token");

        Ok(LoginOutput {
            expires_in: issued.expires_in(),
            access_token: issued.token,
            reused: false,
        })
    }
}
