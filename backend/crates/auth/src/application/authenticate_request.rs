//! Authenticate Request Use Case
//!
//! The decision procedure behind the auth gate. Checks run in a fixed
//! order and the first failure ends the request:
//! 1. anonymous route: allow untouched
//! 2. client authorization: configured header must equal the shared secret
//! 3. user authentication: bearer token must verify and name a known user

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::crypto::secrets_match;
use platform::header::{bearer_token, header_value};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::UserIdentity;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::route_options::RouteOptions;
use crate::error::GateError;

pub struct AuthenticateRequestUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateRequestUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    /// Run the checks `options` asks for.
    ///
    /// Returns the caller's identity when authentication ran, `None` when
    /// the route does not require it.
    pub async fn execute(
        &self,
        options: RouteOptions,
        headers: &HeaderMap,
    ) -> Result<Option<UserIdentity>, GateError> {
        if options.is_anonymous() {
            return Ok(None);
        }

        if options.requires_authorization() {
            self.authorize_client(headers)?;
        }

        if options.requires_authentication() {
            return self.authenticate_user(headers).await.map(Some);
        }

        Ok(None)
    }

    fn authorize_client(&self, headers: &HeaderMap) -> Result<(), GateError> {
        let presented = header_value(headers, &self.config.client_authorization_header)
            .ok_or(GateError::MissingAuthorizationHeader)?;

        if !secrets_match(presented, &self.config.client_authorization_token) {
            return Err(GateError::InvalidAuthorizationSecret);
        }
        Ok(())
    }

    async fn authenticate_user(&self, headers: &HeaderMap) -> Result<UserIdentity, GateError> {
        let token = bearer_token(headers);
        if token.is_empty() {
            return Err(GateError::MissingAuthenticationToken);
        }

        let verified = self.tokens.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token failed verification");
            GateError::InvalidOrExpiredToken
        })?;

        // Lookup failures fail closed
        let user = self
            .user_repo
            .find_user_by_id(&verified.uid)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Identity lookup failed during authentication");
                GateError::InvalidOrExpiredToken
            })?
            .ok_or(GateError::UserNotFound)?;

        Ok(user.identity())
    }
}
