// Password hashing and verification

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::auth::error::AuthError;

/// Password service wrapping Argon2id with per-password random salts
pub struct PasswordService;

impl PasswordService {
    /// Hash a password, producing a self-describing PHC string that
    /// embeds the salt and parameters
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::PasswordHash)
    }

    /// Verify a password against a stored hash
    ///
    /// A mismatch is Ok(false); only a corrupt stored hash is an error.
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHash)?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = PasswordService::hash_password("correct horse").unwrap();
        assert!(PasswordService::verify_password("correct horse", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = PasswordService::hash_password("correct horse").unwrap();
        assert!(!PasswordService::verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Random salts mean two hashes of one password never collide
        let first = PasswordService::hash_password("secret").unwrap();
        let second = PasswordService::hash_password("secret").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_corrupt_hash_is_an_error() {
        let result = PasswordService::verify_password("secret", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::PasswordHash)));
    }
}
