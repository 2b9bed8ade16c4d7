//! Response types for the records console API.
//!
//! This module defines the success bodies that are not plain models and the
//! error structures with their HTTP status mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;
use crate::models::{BlockReason, PayrollEntry, PayrollRun};

/// Body of a successful `POST /payroll/run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunResponse {
    /// The pay year.
    pub year: i32,
    /// The pay month.
    pub month: u32,
    /// Number of rows the run created.
    pub created_count: usize,
    /// The created rows.
    pub entries: Vec<PayrollEntry>,
}

impl From<PayrollRun> for PayrollRunResponse {
    fn from(run: PayrollRun) -> Self {
        Self {
            year: run.period.year,
            month: run.period.month,
            created_count: run.created_count(),
            entries: run.entries,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Roles blocking an employee delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<BlockReason>>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            reasons: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ConsoleError> for ApiErrorResponse {
    fn from(error: ConsoleError) -> Self {
        let message = error.to_string();
        match error {
            ConsoleError::ConfigNotFound { .. } | ConsoleError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        message,
                    ),
                }
            }
            ConsoleError::Validation { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("The field '{}' is invalid", field),
                ),
            },
            ConsoleError::NotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NOT_FOUND", message),
            },
            ConsoleError::BlockedDeletion { reasons, .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError {
                    reasons: Some(reasons),
                    ..ApiError::with_details(
                        "BLOCKED_DELETION",
                        message,
                        "Reassign the listed roles before deleting this employee",
                    )
                },
            },
            ConsoleError::ConstraintViolation { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "CONSTRAINT_VIOLATION",
                    message,
                    "The change was rolled back",
                ),
            },
            ConsoleError::CapabilityDisabled { .. } => ApiErrorResponse {
                status: StatusCode::NOT_IMPLEMENTED,
                error: ApiError::new("CAPABILITY_DISABLED", message),
            },
            ConsoleError::Database(_) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("DATABASE_ERROR", "Database error", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
        assert!(!json.contains("reasons"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_blocked_deletion_maps_to_conflict_with_reasons() {
        let response: ApiErrorResponse = ConsoleError::BlockedDeletion {
            employee_no: 7,
            reasons: vec![BlockReason::DivisionHead, BlockReason::DepartmentHead],
        }
        .into();

        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.error.code, "BLOCKED_DELETION");
        assert_eq!(
            response.error.reasons,
            Some(vec![BlockReason::DivisionHead, BlockReason::DepartmentHead])
        );
    }

    #[test]
    fn test_status_mapping() {
        let not_found: ApiErrorResponse = ConsoleError::NotFound {
            entity: "project",
            id: "9".to_string(),
        }
        .into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);

        let validation: ApiErrorResponse = ConsoleError::Validation {
            field: "month".to_string(),
            message: "must be between 1 and 12, got 0".to_string(),
        }
        .into();
        assert_eq!(validation.status, StatusCode::BAD_REQUEST);
        assert_eq!(validation.error.code, "VALIDATION_ERROR");

        let constraint: ApiErrorResponse = ConsoleError::ConstraintViolation {
            message: "FOREIGN KEY constraint failed".to_string(),
        }
        .into();
        assert_eq!(constraint.status, StatusCode::CONFLICT);
        assert_eq!(constraint.error.code, "CONSTRAINT_VIOLATION");
    }
}
