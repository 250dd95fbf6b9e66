// Authentication data models and DTOs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User database model
///
/// Deliberately not Serialize: the password hash never leaves the
/// process. API responses go through UserResponse.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
}

/// User response model (excludes password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Signup request DTO
///
/// The schema mirrors the account rules: username and password at
/// least 4 characters, confirmation must match, email optional but
/// well-formed when present.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 4, message = "Username must be at least 4 characters"))]
    pub username: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Login request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupRequest {
        SignupRequest {
            username: "trainer".to_string(),
            email: Some("trainer@example.com".to_string()),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        }
    }

    #[test]
    fn test_valid_signup_passes_validation() {
        assert!(valid_signup().validate().is_ok());
    }

    #[test]
    fn test_short_username_rejected() {
        let request = SignupRequest {
            username: "ab".to_string(),
            ..valid_signup()
        };
        // Short username fails even though the passwords match
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let request = SignupRequest {
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            ..valid_signup()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let request = SignupRequest {
            confirm_password: "different".to_string(),
            ..valid_signup()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("confirm_password"));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let request = SignupRequest {
            email: Some("not-an-email".to_string()),
            ..valid_signup()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_email_accepted() {
        let request = SignupRequest {
            email: None,
            ..valid_signup()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User {
            id: 1,
            username: "trainer".to_string(),
            email: None,
            password_hash: "argon2-hash".to_string(),
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).expect("Failed to serialize UserResponse");

        assert!(json.contains("\"username\":\"trainer\""));
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2-hash"));
    }
}
