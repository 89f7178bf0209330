//! Password hashing.

use crate::error::RegisterError;

/// Hash a plaintext password with bcrypt at the default cost.
pub fn hash(plain: &str) -> Result<String, RegisterError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| RegisterError::Hash(e.to_string()))
}

/// Verify a plaintext candidate against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch, not an error.
pub fn verify(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hashed = hash("pw").unwrap();
        assert!(verify("pw", &hashed));
        assert!(!verify("other", &hashed));
    }

    #[test]
    fn malformed_stored_hash_is_a_mismatch() {
        assert!(!verify("pw", "not-a-bcrypt-hash"));
    }
}
