//! Ping and scan endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use qsonar_game::{Coord, ScanLine};
use tracing::info;

use crate::dto::{PingResponse, ScanResponse, TargetRequest};
use crate::error::ApiError;
use crate::state::AppState;

fn require_id(request: TargetRequest) -> Result<String, ApiError> {
    request
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("No ID provided".into()))
}

/// POST /ping - Ping a single cell, e.g. `{"id": "A1"}`.
pub async fn ping(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TargetRequest>,
) -> Result<Json<PingResponse>, ApiError> {
    let id = require_id(request)?;
    let coord: Coord = id.parse()?;

    let result = state.engine.ping(state.board.is_ship(coord)).await?;
    info!(%coord, result, "ping");

    Ok(Json(PingResponse { id, result }))
}

/// POST /scan - Count ships on a row or column, e.g. `{"id": "scan-row-A"}`.
pub async fn scan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TargetRequest>,
) -> Result<Json<ScanResponse>, ApiError> {
    let id = require_id(request)?;
    let line: ScanLine = id.parse()?;

    let count = state.engine.count_scan(&line.targets(&state.board)).await?;
    info!(%line, count, "scan");

    Ok(Json(ScanResponse { id, count }))
}
