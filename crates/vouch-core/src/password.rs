//! # Password Digests
//!
//! The registry stores a password *digest*, never the password itself.
//! The ledger does not interpret the digest — it stores whatever string it
//! is handed — but these helpers are the blessed way for collaborators to
//! produce and check one, so every boundary hashes the same way.
//!
//! No rotation operation exists in the core; a registered user's digest is
//! as immutable as the rest of the record.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hex digest of a plaintext password.
pub fn digest_password(plain: &str) -> String {
    let hash = Sha256::digest(plain.as_bytes());
    let mut out = String::with_capacity(64);
    for byte in hash {
        use std::fmt::Write;
        // Writing to a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(plain: &str, digest: &str) -> bool {
    digest_password(plain) == digest
}
