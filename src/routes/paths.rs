use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::info;

use super::AppState;
use crate::error::ApiError;
use crate::model::{MultiPathRequest, PathRequest};

pub async fn fastest_path(
    State(state): State<AppState>,
    body: Result<Json<PathRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    info!(source = %request.source, target = %request.target, "Fastest path requested");

    let result = state
        .paths
        .compute_path(&request.source, &request.target)
        .await?;
    Ok(Json(result.raw))
}

pub async fn multi_point_path(
    State(state): State<AppState>,
    body: Result<Json<MultiPathRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    info!(source = %request.source, targets = request.targets.len(), "Multi-point path requested");

    let result = state
        .paths
        .compute_multi_path(&request.source, &request.targets)
        .await?;
    Ok(Json(result.raw))
}
