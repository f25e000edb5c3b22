//! Value Object Module

pub mod email;
pub mod profile_field;
pub mod route_options;
pub mod user_id;
