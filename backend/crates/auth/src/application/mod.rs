//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate_request;
pub mod config;
pub mod login;
pub mod manage_profile;
pub mod register;
pub mod token;

// Re-exports
pub use authenticate_request::AuthenticateRequestUseCase;
pub use config::{AuthConfig, JwtConfig};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use manage_profile::{DeleteAccountUseCase, GetProfileUseCase, UpdateProfileUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use token::{TokenService, VerifiedIdentity};
