//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, constant-time comparison)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Request header extraction (shared secrets, bearer tokens)

pub mod crypto;
pub mod header;
pub mod password;
