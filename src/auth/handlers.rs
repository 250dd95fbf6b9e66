// HTTP handlers for the user account endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::{
    error::AuthError,
    models::{LoginRequest, SignupRequest, TokenResponse, UserResponse},
};
use crate::AppState;

/// Handler for POST /users/signup
/// Registers a new user account
#[utoipa::path(
    post,
    path = "/users/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation failure"),
        (status = 409, description = "Username already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "users"
)]
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AuthError> {
    tracing::debug!("Signup attempt for username: {}", request.username);

    let user = state.auth_service.signup(request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler for POST /users/login
/// Authenticates a user and returns a bearer token valid for one hour
#[utoipa::path(
    post,
    path = "/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid username or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "users"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    let response = state.auth_service.login(request).await?;

    Ok(Json(response))
}
