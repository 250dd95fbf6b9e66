// JWT token issuance and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // user_id
    pub iat: i64, // issued at timestamp
    pub exp: i64, // expiration timestamp
}

/// Token service for JWT operations
///
/// The signing secret is injected once at construction and the service
/// is shared read-only across requests. Tokens expire one hour after
/// issuance; there is no refresh mechanism, expiry forces a fresh
/// login.
pub struct TokenService {
    secret: String,
    token_duration: i64, // in seconds
}

const TOKEN_DURATION_SECS: i64 = 3600; // 1 hour

impl TokenService {
    /// Create a new TokenService with the signing secret
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            token_duration: TOKEN_DURATION_SECS,
        }
    }

    /// Issue a signed token embedding the user id
    pub fn issue(&self, user_id: i32) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.token_duration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Verify a token and return the embedded user id
    ///
    /// Expiry is checked with zero leeway so a token is rejected the
    /// moment the current time reaches its expiration timestamp.
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims.sub)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    /// Build a raw token with explicit iat/exp offsets from now
    fn token_with_offsets(secret: &str, user_id: i32, iat_offset: i64, exp_offset: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now + iat_offset,
            exp: now + exp_offset,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_then_verify_returns_user_id() {
        let service = test_token_service();
        let token = service.issue(42).unwrap();
        assert_eq!(service.verify(&token).unwrap(), 42);
    }

    #[test]
    fn test_token_expiration_is_one_hour() {
        let service = test_token_service();
        let token = service.issue(1).unwrap();

        let mut validation = Validation::default();
        validation.leeway = 0;
        let claims = decode::<Claims>(
            &token,
            &DecodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
            &validation,
        )
        .unwrap()
        .claims;

        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_accepted_just_before_expiry() {
        // Issued 59 minutes ago, expires in 1 minute
        let token = token_with_offsets(
            "test_secret_key_for_testing_purposes",
            7,
            -59 * 60,
            60,
        );
        assert_eq!(test_token_service().verify(&token).unwrap(), 7);
    }

    #[test]
    fn test_token_rejected_after_expiry() {
        // Issued 61 minutes ago, expired 1 minute ago
        let token = token_with_offsets(
            "test_secret_key_for_testing_purposes",
            7,
            -61 * 60,
            -60,
        );
        let result = test_token_service().verify(&token);
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let service1 = TokenService::new("secret1".to_string());
        let service2 = TokenService::new("secret2".to_string());

        let token = service1.issue(1).unwrap();

        assert!(service1.verify(&token).is_ok());
        assert!(matches!(
            service2.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.verify("").is_err());
        assert!(service.verify("not.a.token").is_err());
        assert!(service.verify("invalid_token_format").is_err());
        assert!(service
            .verify("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    proptest! {
        #[test]
        fn prop_round_trip_preserves_user_id(user_id in 1i32..1000000) {
            let service = test_token_service();
            let token = service.issue(user_id)?;
            prop_assert_eq!(service.verify(&token)?, user_id);
        }

        #[test]
        fn prop_malformed_tokens_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.verify(&malformed).is_err());
        }
    }
}
