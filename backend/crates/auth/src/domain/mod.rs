//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{IssuedToken, Profile, ProfileDetails, ProfilePatch, User, UserIdentity};
pub use repository::{ProfileRepository, TokenRepository, UserRepository};
