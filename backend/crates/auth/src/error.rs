//! Auth Error Types
//!
//! Two error families integrate with the unified `kernel::error::AppError`:
//! - [`AuthError`] for the account and profile use cases
//! - [`GateError`] for per-request credential checks, always a 401

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

use crate::application::token::TokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

pub const CODE_EMAIL_ALREADY_EXISTS: &str = "auth/email-already-exists";
pub const CODE_INVALID_CREDENTIALS: &str = "auth/invalid-credentials";
pub const CODE_NO_USER_PROFILE: &str = "auth/no-user-profile";
pub const CODE_INVALID_INPUT: &str = "auth/invalid-input";
pub const CODE_WEAK_PASSWORD: &str = "auth/weak-password";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration with an email that already has an account
    #[error("The email address is already in use by another account")]
    EmailTaken,

    /// Login with an email that has no account
    #[error("Invalid email address")]
    UnknownEmail,

    /// Login with a wrong password
    #[error("Invalid password")]
    WrongPassword,

    /// User record missing for an authenticated identity
    #[error("User not found")]
    UserNotFound,

    /// Profile document missing for an authenticated identity
    #[error("User profile not found")]
    ProfileNotFound,

    /// Malformed request input
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    PasswordPolicy(#[from] PasswordPolicyError),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken
            | AuthError::Validation(_)
            | AuthError::PasswordPolicy(_) => ErrorKind::BadRequest,
            AuthError::UnknownEmail
            | AuthError::WrongPassword
            | AuthError::UserNotFound
            | AuthError::ProfileNotFound => ErrorKind::Unauthorized,
            AuthError::PasswordHash(_)
            | AuthError::Token(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code sent as `error` in the response body
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::EmailTaken => CODE_EMAIL_ALREADY_EXISTS,
            AuthError::UnknownEmail | AuthError::WrongPassword | AuthError::UserNotFound => {
                CODE_INVALID_CREDENTIALS
            }
            AuthError::ProfileNotFound => CODE_NO_USER_PROFILE,
            AuthError::Validation(_) => CODE_INVALID_INPUT,
            AuthError::PasswordPolicy(_) => CODE_WEAK_PASSWORD,
            _ => self.kind().code(),
        }
    }

    /// Convert to AppError. Server-side failures never leak their details.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            return AppError::new(kind, "Internal Server Error");
        }
        AppError::new(kind, self.to_string()).with_code(self.code())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Token signing failed");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UnknownEmail | AuthError::WrongPassword => {
                tracing::warn!(error = %self, "Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if !err.is_server_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

// ============================================================================
// Gate errors
// ============================================================================

/// Why the auth gate rejected a request.
///
/// Every variant renders as 401 `unauthorized`; the message is the only
/// distinction a client sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Invalid authorization token")]
    MissingAuthorizationHeader,

    #[error("Invalid authorization token")]
    InvalidAuthorizationSecret,

    #[error("No authentication token")]
    MissingAuthenticationToken,

    /// Bad signature, wrong issuer or audience, expired, or the identity
    /// provider could not be reached.
    #[error("Invalid authentication token")]
    InvalidOrExpiredToken,

    #[error("Invalid authentication token")]
    UserNotFound,
}

impl GateError {
    pub fn to_app_error(self) -> AppError {
        AppError::unauthorized(self.to_string())
    }

    fn log(self) {
        match self {
            GateError::InvalidAuthorizationSecret => {
                tracing::warn!(reason = ?self, "Client authorization rejected");
            }
            GateError::InvalidOrExpiredToken | GateError::UserNotFound => {
                tracing::info!(reason = ?self, "Authentication rejected");
            }
            GateError::MissingAuthorizationHeader | GateError::MissingAuthenticationToken => {
                tracing::debug!(reason = ?self, "Missing credential");
            }
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
