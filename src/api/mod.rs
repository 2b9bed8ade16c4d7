//! HTTP API module for the records console.
//!
//! This module exposes the guarded deletes, payroll runs, payroll history
//! and project statistics as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HistoryQuery, PayrollRunRequest};
pub use response::{ApiError, ApiErrorResponse, HealthResponse, PayrollRunResponse};
pub use state::AppState;
