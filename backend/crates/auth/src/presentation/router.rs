//! Auth Routers
//!
//! Every route is wrapped by the gate with its own [`RouteOptions`].

use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::{ProfileRepository, TokenRepository, UserRepository};
use crate::domain::value_object::route_options::RouteOptions;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::AuthGate;

/// `/register` and `/login`: client authorization only.
pub fn auth_router<R>(gate: &AuthGate<R>) -> Router
where
    R: UserRepository + ProfileRepository + TokenRepository + Send + Sync + 'static,
{
    let client_only = RouteOptions::default().without_authentication();

    Router::new()
        .route(
            "/register",
            gate.guard(client_only, post(handlers::register::<R>)),
        )
        .route("/login", gate.guard(client_only, post(handlers::login::<R>)))
        .with_state(AuthAppState::from(gate))
}

/// `/` with GET, PATCH and DELETE on the caller's own profile: both checks.
pub fn user_router<R>(gate: &AuthGate<R>) -> Router
where
    R: UserRepository + ProfileRepository + TokenRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            gate.guard(
                RouteOptions::default(),
                get(handlers::get_profile::<R>)
                    .patch(handlers::update_profile::<R>)
                    .delete(handlers::delete_account::<R>),
            ),
        )
        .with_state(AuthAppState::from(gate))
}
