//! Request Context
//!
//! Typed per-request data written by the auth gate and read by handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::entity::user::UserIdentity;
use crate::error::GateError;

/// Inserted into the request extensions by the gate on every request it
/// lets through. `user` is set only when the route required authentication.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub user: Option<UserIdentity>,
}

/// Extractor for the authenticated caller.
///
/// Rejects with 401 if the route was not guarded with authentication.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserIdentity);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = GateError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .and_then(|ctx| ctx.user.clone())
            .map(AuthenticatedUser)
            .ok_or(GateError::MissingAuthenticationToken)
    }
}
