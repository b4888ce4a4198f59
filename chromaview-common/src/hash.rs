//! Password digest scheme
//!
//! A single deterministic SHA-256 digest over the password bytes, stored as
//! 64 hex characters. The scheme is intentionally unsalted to match the
//! stored-record shape of the system Chromaview replaces; a per-user salt
//! would change the `users` table layout and is tracked as a hardening item
//! in DESIGN.md rather than slipped in silently.

use sha2::{Digest, Sha256};

/// Digest a password to its stored form (64 lowercase hex characters).
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
