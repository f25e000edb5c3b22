//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    DeleteAccountUseCase, GetProfileUseCase, LoginInput, LoginUseCase, RegisterInput,
    RegisterUseCase, UpdateProfileUseCase,
};
use crate::domain::entity::profile::ProfilePatch;
use crate::domain::repository::{ProfileRepository, TokenRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::context::AuthenticatedUser;
use crate::presentation::dto::{
    AuthResponse, ClientAuthorizationHeader, ErrorResponse, LoginRequest, ProfileResponse,
    RegisterRequest,
};
use crate::presentation::middleware::AuthGate;

/// Shared state for auth handlers
pub struct AuthAppState<R> {
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> From<&AuthGate<R>> for AuthAppState<R> {
    fn from(gate: &AuthGate<R>) -> Self {
        Self {
            repo: gate.repo.clone(),
            tokens: gate.tokens.clone(),
            config: gate.config.clone(),
        }
    }
}

/// Unwrap a JSON body, reporting malformed input as a 400 in the common
/// error format.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AuthError::Validation(rejection.body_text()))
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
#[utoipa::path(
    post,
    path = "/auth/register",
    params(ClientAuthorizationHeader),
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, description = "Invalid field, weak password or email already in use", body = ErrorResponse),
        (status = 401, description = "Client authorization failed", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + ProfileRepository + TokenRepository + Send + Sync + 'static,
{
    let req = json_body(payload)?;

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(RegisterInput {
            password: req.password,
            details: req.details,
        })
        .await?;

    Ok(Json(AuthResponse {
        access_token: output.access_token,
        expires_in: output.expires_in,
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
#[utoipa::path(
    post,
    path = "/auth/login",
    params(ClientAuthorizationHeader),
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Stored token if still valid, otherwise a new one", body = AuthResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Invalid email address or password", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + TokenRepository + Send + Sync + 'static,
{
    let req = json_body(payload)?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(AuthResponse {
        access_token: output.access_token,
        expires_in: output.expires_in,
    }))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /user
#[utoipa::path(
    get,
    path = "/user",
    params(ClientAuthorizationHeader),
    responses(
        (status = 200, description = "Caller's profile", body = ProfileResponse),
        (status = 401, description = "Gate rejection or no profile", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "user"
)]
pub async fn get_profile<R>(
    State(state): State<AuthAppState<R>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> AuthResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());
    let profile = use_case.execute(&user.uid).await?;

    Ok(Json(profile.into()))
}

/// PATCH /user
///
/// Absent or `null` fields keep their stored value.
#[utoipa::path(
    patch,
    path = "/user",
    params(ClientAuthorizationHeader),
    request_body = ProfilePatch,
    responses(
        (status = 201, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Gate rejection or no profile", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "user"
)]
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    AuthenticatedUser(user): AuthenticatedUser,
    payload: Result<Json<ProfilePatch>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<ProfileResponse>)>
where
    R: ProfileRepository + Send + Sync + 'static,
{
    let patch = json_body(payload)?;

    let use_case = UpdateProfileUseCase::new(state.repo.clone());
    let profile = use_case.execute(&user.uid, patch).await?;

    Ok((StatusCode::CREATED, Json(profile.into())))
}

/// DELETE /user
#[utoipa::path(
    delete,
    path = "/user",
    params(ClientAuthorizationHeader),
    responses(
        (status = 204, description = "Profile, token and account removed"),
        (status = 401, description = "Gate rejection or no profile", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "user"
)]
pub async fn delete_account<R>(
    State(state): State<AuthAppState<R>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> AuthResult<StatusCode>
where
    R: UserRepository + ProfileRepository + TokenRepository + Send + Sync + 'static,
{
    let use_case =
        DeleteAccountUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());
    use_case.execute(&user.uid).await?;

    Ok(StatusCode::NO_CONTENT)
}
