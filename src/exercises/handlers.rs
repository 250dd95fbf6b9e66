// HTTP handlers for exercise endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiError;
use crate::exercises::models::{CreateExerciseRequest, Exercise, UpdateExerciseRequest};
use crate::AppState;

/// Handler for GET /exercises/public
/// Lists all public exercises; no authentication required
#[utoipa::path(
    get,
    path = "/exercises/public",
    responses(
        (status = 200, description = "List of public exercises", body = Vec<Exercise>),
        (status = 500, description = "Internal server error")
    ),
    tag = "exercises"
)]
pub async fn list_public_exercises_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises = state.exercise_service.list_public().await?;

    Ok(Json(exercises))
}

/// Handler for GET /exercises/mine
/// Lists the requester's exercises, private ones included
#[utoipa::path(
    get,
    path = "/exercises/mine",
    responses(
        (status = 200, description = "List of the requester's exercises", body = Vec<Exercise>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "exercises"
)]
pub async fn list_my_exercises_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises = state.exercise_service.list_mine(user.user_id).await?;

    Ok(Json(exercises))
}

/// Handler for POST /exercises
/// Creates an exercise owned by the authenticated user
#[utoipa::path(
    post,
    path = "/exercises",
    request_body = CreateExerciseRequest,
    responses(
        (status = 201, description = "Exercise created successfully", body = Exercise),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "exercises"
)]
pub async fn create_exercise_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateExerciseRequest>,
) -> Result<(StatusCode, Json<Exercise>), ApiError> {
    let exercise = state.exercise_service.create(user.user_id, request).await?;

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// Handler for GET /exercises/:id
/// Fetches one exercise, subject to the visibility policy
#[utoipa::path(
    get,
    path = "/exercises/{id}",
    params(("id" = i32, Path, description = "Exercise ID")),
    responses(
        (status = 200, description = "Exercise found", body = Exercise),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Exercise is private and not owned by the requester"),
        (status = 404, description = "Exercise not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "exercises"
)]
pub async fn get_exercise_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = state.exercise_service.get(id, user.user_id).await?;

    Ok(Json(exercise))
}

/// Handler for PUT /exercises/:id
/// Replaces an exercise's fields; owner only
#[utoipa::path(
    put,
    path = "/exercises/{id}",
    params(("id" = i32, Path, description = "Exercise ID")),
    request_body = UpdateExerciseRequest,
    responses(
        (status = 200, description = "Exercise updated successfully", body = Exercise),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Requester does not own the exercise"),
        (status = 404, description = "Exercise not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "exercises"
)]
pub async fn update_exercise_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateExerciseRequest>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = state
        .exercise_service
        .update(id, user.user_id, request)
        .await?;

    Ok(Json(exercise))
}

/// Handler for DELETE /exercises/:id
/// Deletes an exercise; owner only
#[utoipa::path(
    delete,
    path = "/exercises/{id}",
    params(("id" = i32, Path, description = "Exercise ID")),
    responses(
        (status = 204, description = "Exercise deleted successfully"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Requester does not own the exercise"),
        (status = 404, description = "Exercise not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "exercises"
)]
pub async fn delete_exercise_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.exercise_service.delete(id, user.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
