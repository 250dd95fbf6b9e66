use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::access::OwnedResource;
use crate::exercises::models::Exercise;

/// Training plan row as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TrainingPlan {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Beginner full body")]
    pub name: String,
    #[schema(example = "Three sessions a week for the first month")]
    pub description: String,
    #[schema(example = false)]
    pub is_public: bool,
    #[schema(example = 1)]
    pub author_id: i32,
}

impl OwnedResource for TrainingPlan {
    fn author_id(&self) -> i32 {
        self.author_id
    }

    fn is_public(&self) -> bool {
        self.is_public
    }
}

/// A training plan with its associated exercises attached
///
/// A plan with no associations carries an empty list, never null.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingPlanResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub author_id: i32,
    pub exercises: Vec<Exercise>,
}

impl TrainingPlanResponse {
    pub fn from_plan(plan: TrainingPlan, exercises: Vec<Exercise>) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            description: plan.description,
            is_public: plan.is_public,
            author_id: plan.author_id,
            exercises,
        }
    }
}

/// Request body for creating a training plan
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePlanRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
    pub is_public: bool,
}

/// Request body for updating a training plan; a full-field replacement
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePlanRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
    pub is_public: bool,
}

/// Request body for attaching an exercise to a plan
#[derive(Debug, Deserialize, ToSchema)]
pub struct AttachExerciseRequest {
    pub exercise_id: i32,
}

/// Confirmation message body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
