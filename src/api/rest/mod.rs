//! Plain request/response endpoints
//!
//! - `GET /getTraffic`, `/getStatus`, `/getSituation` - one report as JSON
//! - `GET /health` - liveness and open push connections

pub mod health;
pub mod snapshot;

use axum::{http::StatusCode, response::IntoResponse};

/// Fallback for unknown paths
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Returned for non-GET requests on GET-only routes
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
