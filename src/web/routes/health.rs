//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)

use axum::http::StatusCode;

/// GET /health/live
///
/// Returns 200 if the process is alive, no backend checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
