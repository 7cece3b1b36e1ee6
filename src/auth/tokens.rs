/**
 * JWT Token Issuance and Verification
 *
 * This module handles JWT token generation and validation for bearer
 * authentication. Keys are derived once from the configured secret and
 * passed down through application state; nothing here reads the
 * environment.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime in seconds (1 hour).
const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys derived from the configured secret
///
/// Cloneable; the underlying key material is shared via `Arc`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl TokenKeys {
    /// Derive HS256 keys from a shared secret
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    /// Create a signed token for a user
    ///
    /// The token embeds the user ID and email and expires one hour after
    /// issuance.
    pub fn create_token(
        &self,
        user_id: Uuid,
        email: String,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let claims = Claims {
            sub: user_id.to_string(),
            email,
            exp: now + TOKEN_TTL_SECS,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a token
    ///
    /// Fails if the signature does not match, the token is malformed, or
    /// it has expired.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> TokenKeys {
        TokenKeys::from_secret("test-secret")
    }

    #[test]
    fn test_create_and_verify_token() {
        let keys = test_keys();
        let user_id = Uuid::new_v4();
        let token = keys
            .create_token(user_id, "test@example.com".to_string())
            .unwrap();
        assert!(!token.is_empty());

        let claims = keys.verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
    }

    #[test]
    fn test_token_expiry_window() {
        let keys = test_keys();
        let token = keys
            .create_token(Uuid::new_v4(), "test@example.com".to_string())
            .unwrap();
        let claims = keys.verify_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_garbage_token() {
        let keys = test_keys();
        assert!(keys.verify_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let keys = test_keys();
        let token = keys
            .create_token(Uuid::new_v4(), "test@example.com".to_string())
            .unwrap();

        let other = TokenKeys::from_secret("another-secret");
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = test_keys();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Sign an already-expired set of claims with the same key.
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            exp: now - 120,
            iat: now - 3720,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();

        assert!(keys.verify_token(&token).is_err());
    }
}
