//! Entity Module

pub mod issued_token;
pub mod profile;
pub mod user;

pub use issued_token::IssuedToken;
pub use profile::{Profile, ProfileDetails, ProfilePatch};
pub use user::{User, UserIdentity};
