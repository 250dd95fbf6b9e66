// Error handling module for the training catalog API
// Provides the crate-wide error type and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error, warn};

/// Main error type for the API
/// Resource handlers and services return Result<T, ApiError>
///
/// Each variant maps to a specific HTTP status code. NotFound and
/// Forbidden are distinct variants and are never collapsed into one
/// another: a client can always tell "does not exist" from "exists but
/// you cannot access it".
#[derive(Debug)]
pub enum ApiError {
    /// Request validation failure
    /// Maps to HTTP 400 Bad Request
    ValidationError(validator::ValidationErrors),

    /// Resource absent by primary key
    /// Maps to HTTP 404 Not Found
    NotFound { resource: String, id: String },

    /// Resource exists but the requester is not permitted to access or
    /// modify it
    /// Maps to HTTP 403 Forbidden
    Forbidden(String),

    /// Missing or invalid credentials
    /// Maps to HTTP 401 Unauthorized
    Unauthorized(String),

    /// Duplicate unique constraint (association pair, username)
    /// Maps to HTTP 409 Conflict
    Conflict { message: String },

    /// Database operation errors
    /// Maps to HTTP 500; internals are logged and never returned
    DatabaseError(sqlx::Error),

    /// Anything else unexpected
    /// Maps to HTTP 500; internals are logged and never returned
    InternalError(String),
}

/// Consistent error response structure
///
/// JSON format for all error responses: a machine-readable code, a
/// human-readable message, optional field-level details, and a
/// timestamp.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g. "NOT_FOUND", "FORBIDDEN")
    pub error_code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details (e.g. field-level validation errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// ISO 8601 timestamp of when the error occurred
    pub timestamp: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = self.to_error_response();
        (status, Json(error_response)).into_response()
    }
}

impl ApiError {
    /// Convert ApiError to HTTP status code and ErrorResponse
    ///
    /// Logging levels track severity: debug! for expected client errors
    /// (validation, not found), warn! for denials that may indicate
    /// probing, error! for 500s. Sensitive internals are filtered from
    /// the client-facing message.
    fn to_error_response(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::ValidationError(errors) => {
                debug!("Validation error: {:?}", errors);

                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error_code: "VALIDATION_ERROR".to_string(),
                        message: "Request validation failed".to_string(),
                        details: Some(
                            serde_json::to_value(errors).unwrap_or(serde_json::json!({})),
                        ),
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::NotFound { resource, id } => {
                debug!("Resource not found: {} with id {}", resource, id);

                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error_code: "NOT_FOUND".to_string(),
                        message: format!("{} with id {} not found", resource, id),
                        details: None,
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::Forbidden(message) => {
                warn!("Forbidden access attempt: {}", message);

                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse {
                        error_code: "FORBIDDEN".to_string(),
                        message: message.clone(),
                        details: None,
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::Unauthorized(message) => {
                warn!("Unauthorized access attempt: {}", message);

                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        error_code: "UNAUTHORIZED".to_string(),
                        message: message.clone(),
                        details: None,
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::Conflict { message } => {
                warn!("Conflict error: {}", message);

                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error_code: "CONFLICT".to_string(),
                        message: message.clone(),
                        details: None,
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::DatabaseError(db_error) => {
                // Full database error is logged internally only
                error!("Database error: {:?}", db_error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_code: "DATABASE_ERROR".to_string(),
                        message: "A database error occurred".to_string(),
                        details: None,
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::InternalError(internal_msg) => {
                error!("Internal error: {}", internal_msg);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred".to_string(),
                        details: None,
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Unanticipated sqlx errors collapse to a generic 500
impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        ApiError::DatabaseError(error)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = ApiError::NotFound {
            resource: "Exercise".to_string(),
            id: "1".to_string(),
        };
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let forbidden = ApiError::Forbidden("Access denied".to_string());
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

        let conflict = ApiError::Conflict {
            message: "duplicate".to_string(),
        };
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let unauthorized = ApiError::Unauthorized("no token".to_string());
        assert_eq!(unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_not_found_and_forbidden_are_distinct_signals() {
        let not_found = ApiError::NotFound {
            resource: "Training plan".to_string(),
            id: "7".to_string(),
        };
        let forbidden = ApiError::Forbidden("Access denied".to_string());

        let (nf_status, nf_body) = not_found.to_error_response();
        let (fb_status, fb_body) = forbidden.to_error_response();

        assert_ne!(nf_status, fb_status);
        assert_ne!(nf_body.error_code, fb_body.error_code);
    }

    #[test]
    fn test_database_error_hides_internals() {
        let err = ApiError::DatabaseError(sqlx::Error::PoolTimedOut);
        let (status, body) = err.to_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "A database error occurred");
        assert!(body.details.is_none());
    }
}
