//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Configuration, token service and use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - Auth gate, HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Email + password registration and login
//! - Signed session tokens (JWT, HMAC) persisted per user
//! - Per-user profile documents (read, partial update, delete)
//! - Per-route auth gate: client authorization secret, then bearer token
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Client secret compared in constant time
//! - Every gate failure is a uniform 401 with no hint beyond its message

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::{AuthConfig, JwtConfig};
pub use application::token::TokenService;
pub use domain::value_object::route_options::RouteOptions;
pub use error::{AuthError, AuthResult, GateError};
pub use infra::memory::InMemoryAuthRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::context::{AuthenticatedUser, RequestContext};
pub use presentation::middleware::AuthGate;
pub use presentation::router::{auth_router, user_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
