//! Presentation Layer
//!
//! Auth gate, HTTP handlers, DTOs and routers.

pub mod context;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use context::{AuthenticatedUser, RequestContext};
pub use handlers::AuthAppState;
pub use middleware::{AuthGate, AuthGateState, auth_gate};
pub use router::{auth_router, user_router};
