//! Cryptographic Utilities

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Compare two shared secrets without leaking their lengths or the position
/// of the first differing byte.
///
/// Both sides are digested first, so the comparison always runs over 32 bytes.
pub fn secrets_match(presented: &str, expected: &str) -> bool {
    constant_time_eq(&sha256(presented.as_bytes()), &sha256(expected.as_bytes()))
}
