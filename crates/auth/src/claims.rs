use serde::{Deserialize, Serialize};

/// Access-token claims.
///
/// The minimal set this service encodes: the subject (user email) plus the
/// issued-at/expiry window, as Unix timestamps so standard JWT expiry
/// validation applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the user's email address.
    pub sub: String,

    /// Issued-at (Unix seconds).
    pub iat: i64,

    /// Expiry (Unix seconds).
    pub exp: i64,
}
