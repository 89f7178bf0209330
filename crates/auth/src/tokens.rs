//! HS256 access-token mint and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::claims::AccessClaims;
use crate::error::AuthError;

/// A freshly minted bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    /// Seconds until expiry.
    pub expires_in: i64,
}

/// Mints and verifies HS256 access tokens over a shared process secret.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

const DEFAULT_TTL_MINUTES: i64 = 30;

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Mint a token for an already-authenticated subject.
    ///
    /// Credential checking happens before this call; the issuer only signs.
    pub fn issue(&self, subject: &str) -> Result<AccessToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;

        let claims = AccessClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        tracing::debug!(subject, ttl_seconds = self.ttl.num_seconds(), "issuing access token");

        let token = encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        Ok(AccessToken {
            token,
            expires_in: self.ttl.num_seconds(),
        })
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn verify(&self, raw: &str) -> Result<AccessClaims, AuthError> {
        decode::<AccessClaims>(raw, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_preserves_subject() {
        let issuer = TokenIssuer::new(b"test-secret");
        let minted = issuer.issue("a@b.com").unwrap();

        let claims = issuer.verify(&minted.token).unwrap();
        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(minted.expires_in, DEFAULT_TTL_MINUTES * 60);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let issuer = TokenIssuer::new(b"test-secret");
        assert_eq!(issuer.verify("garbage"), Err(AuthError::InvalidToken));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = TokenIssuer::new(b"secret-one");
        let other = TokenIssuer::new(b"secret-two");

        let minted = issuer.issue("a@b.com").unwrap();
        assert_eq!(other.verify(&minted.token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the default validation leeway.
        let issuer = TokenIssuer::with_ttl(b"test-secret", Duration::minutes(-5));
        let minted = issuer.issue("a@b.com").unwrap();
        assert_eq!(issuer.verify(&minted.token), Err(AuthError::InvalidToken));
    }
}
