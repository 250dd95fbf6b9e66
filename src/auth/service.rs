// Authentication service - business logic layer

use std::sync::Arc;

use validator::Validate;

use crate::auth::{
    error::AuthError,
    models::{LoginRequest, SignupRequest, TokenResponse, UserResponse},
    password::PasswordService,
    repository::UserRepository,
    token::TokenService,
};

/// Authentication service coordinating signup and login
pub struct AuthService {
    user_repo: UserRepository,
    token_service: Arc<TokenService>,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(user_repo: UserRepository, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// Register a new user
    ///
    /// 1. Validates the request against the signup schema
    /// 2. Hashes the password
    /// 3. Inserts the user (duplicate username -> UsernameTaken)
    /// 4. Returns the record with the hash omitted
    pub async fn signup(&self, request: SignupRequest) -> Result<UserResponse, AuthError> {
        request
            .validate()
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        let password_hash = PasswordService::hash_password(&request.password)?;

        let user = self
            .user_repo
            .create_user(&request.username, request.email.as_deref(), &password_hash)
            .await?;

        tracing::info!("New user registered: {} (id {})", user.username, user.id);
        Ok(user.into())
    }

    /// Authenticate a user and issue a bearer token
    ///
    /// An unknown username and a wrong password produce the identical
    /// InvalidCredentials error so the response never reveals whether
    /// the username exists.
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, AuthError> {
        let user = self
            .user_repo
            .find_by_username(&request.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify_password(&request.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_service.issue(user.id)?;

        tracing::debug!("User {} logged in", user.id);
        Ok(TokenResponse { token })
    }
}
