//! HTTP request handlers for the records console API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ConsoleError;
use crate::services;

use super::request::{HistoryQuery, PayrollRunRequest};
use super::response::{ApiError, ApiErrorResponse, HealthResponse, PayrollRunResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/employees/:employee_no", delete(delete_employee_handler))
        .route("/projects/:project_number", delete(delete_project_handler))
        .route("/projects/:project_number/stats", get(project_stats_handler))
        .route("/payroll/run", post(run_payroll_handler))
        .route("/payroll/history", get(payroll_history_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, error: ConsoleError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    let api_error: ApiErrorResponse = error.into();
    json_response(api_error.status, api_error.error)
}

fn path_error(correlation_id: Uuid, rejection: PathRejection) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "Invalid path parameter"
    );
    let api_error = ApiErrorResponse::bad_request(ApiError::validation_error(format!(
        "Invalid path parameter: {}",
        rejection.body_text()
    )));
    json_response(api_error.status, api_error.error)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

/// Handler for DELETE /employees/:employee_no.
async fn delete_employee_handler(
    State(state): State<AppState>,
    employee_no: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(employee_no) = match employee_no {
        Ok(path) => path,
        Err(rejection) => return path_error(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, employee_no, "Processing employee delete");

    match services::delete_employee(state.db(), state.capabilities(), employee_no).await {
        Ok(deletion) => json_response(StatusCode::OK, deletion),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /projects/:project_number.
async fn delete_project_handler(
    State(state): State<AppState>,
    project_number: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(project_number) = match project_number {
        Ok(path) => path,
        Err(rejection) => return path_error(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, project_number, "Processing project delete");

    match services::delete_project(state.db(), state.capabilities(), project_number).await {
        Ok(deletion) => json_response(StatusCode::OK, deletion),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /projects/:project_number/stats.
async fn project_stats_handler(
    State(state): State<AppState>,
    project_number: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(project_number) = match project_number {
        Ok(path) => path,
        Err(rejection) => return path_error(correlation_id, rejection),
    };

    match services::project_stats(state.db(), state.capabilities(), project_number).await {
        Ok(stats) => {
            info!(
                correlation_id = %correlation_id,
                project_number,
                team_count = stats.team_count,
                "Project stats served"
            );
            json_response(StatusCode::OK, stats)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /payroll/run.
///
/// Accepts `{ "year", "month" }` and returns the rows the run created.
async fn run_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    match services::run_payroll(state.db(), state.capabilities(), request.year, request.month)
        .await
    {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                year = request.year,
                month = request.month,
                created_count = run.created_count(),
                "Payroll run served"
            );
            json_response(StatusCode::OK, PayrollRunResponse::from(run))
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /payroll/history.
async fn payroll_history_handler(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid query string"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            );
        }
    };

    let period = match query.period() {
        Ok(period) => period,
        Err(missing) => {
            return error_response(
                correlation_id,
                ConsoleError::Validation {
                    field: missing.to_string(),
                    message: "year and month must be given together".to_string(),
                },
            );
        }
    };

    match services::payroll_history(state.db(), state.capabilities(), period).await {
        Ok(rows) => {
            info!(
                correlation_id = %correlation_id,
                rows = rows.len(),
                "Payroll history served"
            );
            json_response(StatusCode::OK, rows)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Capabilities;
    use crate::services::fixtures::seeded_db;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn create_test_router() -> Router {
        let db = seeded_db(Capabilities::all()).await;
        create_router(AppState::new(db, Capabilities::all()))
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_test_router().await;

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let health: HealthResponse = body_json(response).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_non_numeric_employee_id_returns_400() {
        let router = create_test_router().await;

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/employees/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_test_router().await;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll/run")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_month_returns_validation_error() {
        let router = create_test_router().await;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll/run")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"year": 2024}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_history_with_year_only_returns_400() {
        let router = create_test_router().await;

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/payroll/history?year=2024")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
