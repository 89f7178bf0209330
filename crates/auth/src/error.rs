use thiserror::Error;

use chaintrack_core::DomainError;

/// Authentication failure.
///
/// Every variant here is user-visible; the API layer translates them to
/// wire-level statuses without local recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login failed: unknown email or password hash mismatch.
    #[error("incorrect username or password")]
    InvalidCredentials,

    /// Bearer token was malformed, unsigned, or expired.
    #[error("invalid or expired token")]
    InvalidToken,

    /// Token verified but its subject no longer resolves to a user.
    #[error("user not found")]
    UnknownSubject,

    /// Token verified but the user account is deactivated.
    #[error("inactive user")]
    Inactive,

    /// Token could not be signed (process misconfiguration).
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Signup failure.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Required-field validation failed (bad email, empty password).
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Hash(String),
}
