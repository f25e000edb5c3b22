//! Route Options
//!
//! Per-route credential requirements, attached when the route is registered
//! and read by the auth gate on every request.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteOptionsError {
    #[error("an anonymous route cannot require client authorization or user authentication")]
    AnonymousWithCredentials,
}

/// Which checks the auth gate runs for a route.
///
/// Defaults: not anonymous, client authorization required, user
/// authentication required.
///
/// ## Examples
/// ```rust
/// use auth::RouteOptions;
///
/// let login = RouteOptions::default().without_authentication();
/// assert!(login.requires_authorization());
/// assert!(!login.requires_authentication());
///
/// assert!(RouteOptions::new(true, true, false).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOptions {
    anonymous: bool,
    requires_authorization: bool,
    requires_authentication: bool,
}

impl RouteOptions {
    /// Build options from explicit flags.
    pub fn new(
        anonymous: bool,
        requires_authorization: bool,
        requires_authentication: bool,
    ) -> Result<Self, RouteOptionsError> {
        if anonymous && (requires_authorization || requires_authentication) {
            return Err(RouteOptionsError::AnonymousWithCredentials);
        }
        Ok(Self {
            anonymous,
            requires_authorization,
            requires_authentication,
        })
    }

    /// Public route: the gate lets every request through untouched.
    pub const fn anonymous() -> Self {
        Self {
            anonymous: true,
            requires_authorization: false,
            requires_authentication: false,
        }
    }

    /// Keep the client check, skip the bearer token (e.g. login).
    pub const fn without_authentication(mut self) -> Self {
        self.requires_authentication = false;
        self
    }

    pub const fn without_authorization(mut self) -> Self {
        self.requires_authorization = false;
        self
    }

    pub const fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub const fn requires_authorization(&self) -> bool {
        self.requires_authorization
    }

    pub const fn requires_authentication(&self) -> bool {
        self.requires_authentication
    }
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            anonymous: false,
            requires_authorization: true,
            requires_authentication: true,
        }
    }
}
