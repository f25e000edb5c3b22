//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::entity::profile::{Profile, ProfileDetails};

// ============================================================================
// Headers
// ============================================================================

/// Client authorization header, documented under its default name.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Header)]
pub struct ClientAuthorizationHeader {
    /// Shared client secret
    #[serde(rename = "x-app-client-authorization-token")]
    pub client_authorization_token: String,
}

// ============================================================================
// Register
// ============================================================================

/// Register request: the profile questionnaire plus a password
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub password: String,
    #[serde(flatten)]
    pub details: ProfileDetails,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(format = Email)]
    pub email: String,
    pub password: String,
}

/// Register and login response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

// ============================================================================
// Profile
// ============================================================================

/// Profile document as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub details: ProfileDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            details: profile.details,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error body shared by every failing response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable code, e.g. `unauthorized` or `auth/invalid-credentials`
    pub error: String,
    pub message: String,
}
