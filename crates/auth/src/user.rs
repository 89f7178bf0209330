//! User credential record.

use chrono::{DateTime, Utc};

use chaintrack_core::{DomainError, Record, UserId};

use crate::error::RegisterError;
use crate::password;

/// A user account.
///
/// # Invariants
/// - `email` is trimmed and lowercased at registration and unique across
///   the store (enforced by the user store).
/// - `hashed_password` is a bcrypt hash; the plaintext is never retained.
/// - Accounts are never deleted; deactivation flips `is_active`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Normalize an email for storage and lookup: trimmed, lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl User {
    /// Register a new account from signup input.
    ///
    /// Validates required-field presence, normalizes the email, and hashes
    /// the password. New accounts start active.
    pub fn register(
        id: UserId,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, RegisterError> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("invalid email format").into());
        }
        if password.is_empty() {
            return Err(DomainError::validation("password cannot be empty").into());
        }

        Ok(Self {
            id,
            email,
            hashed_password: password::hash(password)?,
            is_active: true,
            created_at: now,
        })
    }

    /// Check a plaintext candidate against the stored hash.
    pub fn verify_password(&self, candidate: &str) -> bool {
        password::verify(candidate, &self.hashed_password)
    }
}

impl Record for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_normalizes_email_and_hashes_password() {
        let user = User::register(UserId::new(), "  Alice@Example.COM ", "pw", Utc::now()).unwrap();

        assert_eq!(user.email, "alice@example.com");
        assert!(user.is_active);
        assert_ne!(user.hashed_password, "pw");
        assert!(user.verify_password("pw"));
        assert!(!user.verify_password("wrong"));
    }

    #[test]
    fn register_rejects_invalid_email() {
        let result = User::register(UserId::new(), "not-an-email", "pw", Utc::now());
        assert!(matches!(result, Err(RegisterError::Invalid(_))));
    }

    #[test]
    fn register_rejects_empty_password() {
        let result = User::register(UserId::new(), "a@b.com", "", Utc::now());
        assert!(matches!(result, Err(RegisterError::Invalid(_))));
    }
}
