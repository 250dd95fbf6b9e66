// HTTP handlers for training plan endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiError;
use crate::plans::models::{
    AttachExerciseRequest, CreatePlanRequest, MessageResponse, TrainingPlanResponse,
    UpdatePlanRequest,
};
use crate::AppState;

/// Handler for GET /plans/public
/// Lists all public training plans with their exercises; no
/// authentication required
#[utoipa::path(
    get,
    path = "/plans/public",
    responses(
        (status = 200, description = "List of public training plans", body = Vec<TrainingPlanResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "plans"
)]
pub async fn list_public_plans_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrainingPlanResponse>>, ApiError> {
    let plans = state.plan_service.list_public().await?;

    Ok(Json(plans))
}

/// Handler for GET /plans/mine
/// Lists the requester's training plans, private ones included
#[utoipa::path(
    get,
    path = "/plans/mine",
    responses(
        (status = 200, description = "List of the requester's training plans", body = Vec<TrainingPlanResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "plans"
)]
pub async fn list_my_plans_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<TrainingPlanResponse>>, ApiError> {
    let plans = state.plan_service.list_mine(user.user_id).await?;

    Ok(Json(plans))
}

/// Handler for POST /plans
/// Creates a training plan owned by the authenticated user
#[utoipa::path(
    post,
    path = "/plans",
    request_body = CreatePlanRequest,
    responses(
        (status = 201, description = "Training plan created successfully", body = TrainingPlanResponse),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "plans"
)]
pub async fn create_plan_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreatePlanRequest>,
) -> Result<(StatusCode, Json<TrainingPlanResponse>), ApiError> {
    let plan = state.plan_service.create(user.user_id, request).await?;

    Ok((StatusCode::CREATED, Json(plan)))
}

/// Handler for GET /plans/:id
/// Fetches one plan with its exercises, subject to the visibility
/// policy
#[utoipa::path(
    get,
    path = "/plans/{id}",
    params(("id" = i32, Path, description = "Training plan ID")),
    responses(
        (status = 200, description = "Training plan found", body = TrainingPlanResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Plan is private and not owned by the requester"),
        (status = 404, description = "Training plan not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "plans"
)]
pub async fn get_plan_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<TrainingPlanResponse>, ApiError> {
    let plan = state.plan_service.get(id, user.user_id).await?;

    Ok(Json(plan))
}

/// Handler for PUT /plans/:id
/// Replaces a plan's fields; owner only
#[utoipa::path(
    put,
    path = "/plans/{id}",
    params(("id" = i32, Path, description = "Training plan ID")),
    request_body = UpdatePlanRequest,
    responses(
        (status = 200, description = "Training plan updated successfully", body = TrainingPlanResponse),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Requester does not own the plan"),
        (status = 404, description = "Training plan not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "plans"
)]
pub async fn update_plan_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdatePlanRequest>,
) -> Result<Json<TrainingPlanResponse>, ApiError> {
    let plan = state.plan_service.update(id, user.user_id, request).await?;

    Ok(Json(plan))
}

/// Handler for DELETE /plans/:id
/// Deletes a plan and its associations; owner only
#[utoipa::path(
    delete,
    path = "/plans/{id}",
    params(("id" = i32, Path, description = "Training plan ID")),
    responses(
        (status = 204, description = "Training plan deleted successfully"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Requester does not own the plan"),
        (status = 404, description = "Training plan not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "plans"
)]
pub async fn delete_plan_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.plan_service.delete(id, user.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /plans/:id/exercises
/// Attaches an exercise to a plan; plan owner only
#[utoipa::path(
    post,
    path = "/plans/{id}/exercises",
    params(("id" = i32, Path, description = "Training plan ID")),
    request_body = AttachExerciseRequest,
    responses(
        (status = 201, description = "Exercise added to the training plan", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Requester does not own the plan"),
        (status = 404, description = "Training plan or exercise not found"),
        (status = 409, description = "Exercise is already part of the plan"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "plans"
)]
pub async fn attach_exercise_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<AttachExerciseRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state
        .plan_service
        .attach_exercise(id, request.exercise_id, user.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Exercise added to training plan successfully".to_string(),
        }),
    ))
}

/// Handler for DELETE /plans/:id/exercises/:exercise_id
/// Detaches an exercise from a plan; plan owner only. Detaching a pair
/// that is not associated succeeds as a no-op.
#[utoipa::path(
    delete,
    path = "/plans/{id}/exercises/{exercise_id}",
    params(
        ("id" = i32, Path, description = "Training plan ID"),
        ("exercise_id" = i32, Path, description = "Exercise ID")
    ),
    responses(
        (status = 204, description = "Exercise removed from the training plan"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Requester does not own the plan"),
        (status = 404, description = "Training plan not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "plans"
)]
pub async fn detach_exercise_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path((id, exercise_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    state
        .plan_service
        .detach_exercise(id, exercise_id, user.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
