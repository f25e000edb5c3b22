//! Auth Gate Middleware
//!
//! Attaches the credential checks to individual routes. Each route carries
//! its own [`RouteOptions`]; the gate reads them on every request.

use axum::extract::{Request, State};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::{IntoResponse, Response};
use axum::Router;
use axum::routing::MethodRouter;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::AuthenticateRequestUseCase;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::route_options::RouteOptions;
use crate::presentation::context::RequestContext;

/// Shared, immutable gate dependencies
pub struct AuthGate<R> {
    pub(crate) repo: Arc<R>,
    pub(crate) tokens: Arc<TokenService>,
    pub(crate) config: Arc<AuthConfig>,
}

impl<R> Clone for AuthGate<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> AuthGate<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: AuthConfig) -> Self {
        let tokens = Arc::new(TokenService::new(&config.jwt));
        Self {
            repo,
            tokens,
            config: Arc::new(config),
        }
    }

    pub fn repo(&self) -> &Arc<R> {
        &self.repo
    }

    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    pub fn config(&self) -> &Arc<AuthConfig> {
        &self.config
    }

    /// Wrap `route` so every request to it passes the gate first.
    ///
    /// ```rust,ignore
    /// let routes = Router::new()
    ///     .route("/ping", gate.guard(RouteOptions::anonymous(), get(ping)))
    ///     .route("/user", gate.guard(RouteOptions::default(), get(profile)));
    /// ```
    pub fn guard<S>(&self, options: RouteOptions, route: MethodRouter<S>) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let state = AuthGateState {
            gate: self.clone(),
            options,
        };
        route.layer(from_fn_with_state(state, auth_gate::<R>))
    }

    /// Like [`guard`](Self::guard), for a whole router that is mounted as
    /// one unit (generated documentation, for instance).
    pub fn guard_router<S>(&self, options: RouteOptions, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let state = AuthGateState {
            gate: self.clone(),
            options,
        };
        router.layer(from_fn_with_state(state, auth_gate::<R>))
    }
}

/// Middleware state: the gate plus the options of one route
pub struct AuthGateState<R> {
    gate: AuthGate<R>,
    options: RouteOptions,
}

impl<R> Clone for AuthGateState<R> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            options: self.options,
        }
    }
}

/// Middleware that runs the checks the route's options ask for
pub async fn auth_gate<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = AuthenticateRequestUseCase::new(
        state.gate.repo.clone(),
        state.gate.tokens.clone(),
        state.gate.config.clone(),
    );

    match use_case.execute(state.options, req.headers()).await {
        Ok(user) => {
            if let Some(identity) = &user {
                tracing::debug!(user_id = %identity.uid, "Request authenticated");
            }
            req.extensions_mut().insert(RequestContext { user });
            next.run(req).await
        }
        Err(rejection) => rejection.into_response(),
    }
}
