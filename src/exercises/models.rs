use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::access::OwnedResource;

/// Represents an exercise in the catalog
///
/// Visibility is controlled by is_public; ownership by author_id, which
/// never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exercise {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Barbell squat")]
    pub name: String,
    #[schema(example = "Back squat with a barbell at shoulder height")]
    pub description: String,
    /// Free-form length, e.g. "4 sets x 10 reps"
    #[schema(example = "4 sets x 10 reps")]
    pub length: String,
    #[schema(example = "https://example.com/squat.mp4")]
    pub video_url: Option<String>,
    #[schema(example = false)]
    pub is_public: bool,
    #[schema(example = 1)]
    pub author_id: i32,
}

impl OwnedResource for Exercise {
    fn author_id(&self) -> i32 {
        self.author_id
    }

    fn is_public(&self) -> bool {
        self.is_public
    }
}

/// Request body for creating an exercise
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "Length must not be empty"))]
    pub length: String,
    #[validate(url(message = "Video URL must be a valid URL"))]
    pub video_url: Option<String>,
    pub is_public: bool,
}

/// Request body for updating an exercise; a full-field replacement
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateExerciseRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "Length must not be empty"))]
    pub length: String,
    #[validate(url(message = "Video URL must be a valid URL"))]
    pub video_url: Option<String>,
    pub is_public: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_name() {
        let request = CreateExerciseRequest {
            name: String::new(),
            description: "desc".to_string(),
            length: "3 x 12".to_string(),
            video_url: None,
            is_public: false,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_bad_video_url() {
        let request = CreateExerciseRequest {
            name: "Plank".to_string(),
            description: "Hold".to_string(),
            length: "60s".to_string(),
            video_url: Some("not a url".to_string()),
            is_public: true,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_video_url_optional() {
        let request = CreateExerciseRequest {
            name: "Plank".to_string(),
            description: "Hold".to_string(),
            length: "60s".to_string(),
            video_url: None,
            is_public: true,
        };
        assert!(request.validate().is_ok());
    }
}
