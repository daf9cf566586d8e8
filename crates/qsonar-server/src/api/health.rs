//! Health and self-check endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use qsonar_game::{SelfCheckReport, selfcheck};

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /api/health - Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.engine.backend().name()))
}

/// GET /api/selfcheck - Run the engine's known-answer checks.
pub async fn selfcheck(State(state): State<Arc<AppState>>) -> Json<SelfCheckReport> {
    Json(selfcheck::run(&state.engine).await)
}
