//! Snapshot endpoints - one report per request, no held connection

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::websocket::state::AppState;
use crate::types::{SituationReport, StatusReport, TrafficReport};

/// GET /getTraffic
pub async fn get_traffic(State(state): State<Arc<AppState>>) -> Json<TrafficReport> {
    Json(state.sources.traffic.next_report())
}

/// GET /getStatus
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusReport> {
    Json(state.sources.status.next_report())
}

/// GET /getSituation
pub async fn get_situation(State(state): State<Arc<AppState>>) -> Json<SituationReport> {
    Json(state.sources.situation.next_report())
}
