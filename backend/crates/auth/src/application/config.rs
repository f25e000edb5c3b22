//! Application Configuration
//!
//! Configuration for the Auth application layer. Values are read from the
//! environment once by the binary and handed in here; nothing in this crate
//! reads environment variables.

use std::fmt;
use std::time::Duration;

use axum::http::HeaderName;
use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Header carrying the client authorization secret unless overridden
pub const DEFAULT_CLIENT_AUTHORIZATION_HEADER: &str = "x-app-client-authorization-token";

/// Session token lifetime unless overridden
pub const DEFAULT_TOKEN_TTL_DAYS: u64 = 90;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),

    #[error("unsupported token algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),

    #[error("token lifetime must be at least one day")]
    ZeroTokenTtl,
}

// ============================================================================
// Token configuration
// ============================================================================

/// Session token signing and validation settings
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC secret
    pub secret: String,
    /// Expected `iss`
    pub issuer: String,
    /// Expected `aud`
    pub audience: String,
    pub algorithm: Algorithm,
    pub token_ttl: Duration,
}

impl JwtConfig {
    /// HS256 with a 90-day lifetime.
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::Empty("token secret"));
        }

        Ok(Self {
            secret,
            issuer: issuer.into(),
            audience: audience.into(),
            algorithm: Algorithm::HS256,
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_DAYS * SECONDS_PER_DAY),
        })
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_token_ttl_days(mut self, days: u64) -> Result<Self, ConfigError> {
        if days == 0 {
            return Err(ConfigError::ZeroTokenTtl);
        }
        self.token_ttl = Duration::from_secs(days.saturating_mul(SECONDS_PER_DAY));
        Ok(self)
    }

    /// Parse an algorithm name. Only the HMAC family is supported since the
    /// signing key is a shared secret.
    pub fn parse_algorithm(name: &str) -> Result<Algorithm, ConfigError> {
        match name.trim().to_ascii_uppercase().as_str() {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            _ => Err(ConfigError::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("algorithm", &self.algorithm)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

// ============================================================================
// Auth configuration
// ============================================================================

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Header the client secret is read from
    pub client_authorization_header: HeaderName,
    /// Shared secret every first-party client presents
    pub client_authorization_token: String,
    pub jwt: JwtConfig,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(
        client_authorization_token: impl Into<String>,
        jwt: JwtConfig,
    ) -> Result<Self, ConfigError> {
        let client_authorization_token = client_authorization_token.into();
        if client_authorization_token.is_empty() {
            return Err(ConfigError::Empty("client authorization token"));
        }

        Ok(Self {
            client_authorization_header: HeaderName::from_static(
                DEFAULT_CLIENT_AUTHORIZATION_HEADER,
            ),
            client_authorization_token,
            jwt,
            password_pepper: None,
        })
    }

    /// Read the client secret from a different header. Header names are
    /// case-insensitive and stored lowercased.
    pub fn with_client_authorization_header(mut self, name: &str) -> Result<Self, ConfigError> {
        self.client_authorization_header = HeaderName::try_from(name.trim().to_ascii_lowercase())
            .map_err(|_| ConfigError::InvalidHeaderName(name.to_string()))?;
        Ok(self)
    }

    pub fn with_password_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        let pepper = pepper.into();
        self.password_pepper = (!pepper.is_empty()).then_some(pepper);
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("client_authorization_header", &self.client_authorization_header)
            .field("client_authorization_token", &"[REDACTED]")
            .field("jwt", &self.jwt)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
