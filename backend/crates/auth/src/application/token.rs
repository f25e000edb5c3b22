//! Session Token Service
//!
//! Issues and verifies HMAC-signed JWTs. The signing secret, issuer,
//! audience and algorithm come from [`JwtConfig`].

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::config::JwtConfig;
use crate::domain::entity::{issued_token::IssuedToken, user::User};
use crate::domain::value_object::user_id::UserId;

/// Claims every token must carry to be accepted
const REQUIRED_CLAIMS: [&str; 4] = ["exp", "iss", "aud", "sub"];

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Rejected(#[source] jsonwebtoken::errors::Error),

    #[error("token subject does not name a user")]
    MalformedSubject,
}

/// JWT claims. `sub` and `uid` both hold the user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub uid: String,
    pub email: String,
}

/// What a valid token says about its bearer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub uid: UserId,
    pub email: String,
}

pub struct TokenService {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&REQUIRED_CLAIMS);

        Self {
            header: Header::new(config.algorithm),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl_secs: i64::try_from(config.token_ttl.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Sign a fresh token for `user`.
    pub fn issue(&self, user: &User) -> Result<IssuedToken, TokenError> {
        self.issue_at(user, Utc::now())
    }

    pub(crate) fn issue_at(&self, user: &User, now: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        let iat = now.timestamp();
        let exp = iat.saturating_add(self.ttl_secs);
        let uid = user.user_id.to_string();

        let claims = SessionClaims {
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            sub: uid.clone(),
            iat,
            exp,
            uid,
            email: user.email.to_string(),
        };

        let token =
            encode(&self.header, &claims, &self.encoding_key).map_err(TokenError::Signing)?;

        Ok(IssuedToken {
            user_id: user.user_id,
            token,
            issued_at: now,
            expires_at: DateTime::from_timestamp(exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC),
        })
    }

    /// Check signature, issuer, audience and expiry, then read the identity.
    pub fn verify(&self, token: &str) -> Result<VerifiedIdentity, TokenError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::Rejected)?;
        let claims = data.claims;

        if claims.sub != claims.uid {
            return Err(TokenError::MalformedSubject);
        }
        let uid = claims
            .uid
            .parse::<UserId>()
            .map_err(|_| TokenError::MalformedSubject)?;

        Ok(VerifiedIdentity {
            uid,
            email: claims.email,
        })
    }
}
