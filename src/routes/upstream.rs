//! Read-through access to the sensor simulation service. Payloads are validated and
//! returned unchanged.

use axum::extract::{Path, State};
use axum::Json;
use gateway_framework::UpstreamClient;
use serde_json::Value;

use super::AppState;
use crate::error::ApiError;

pub async fn list_rooms(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.rooms.list().await?.raw))
}

pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.rooms.get(&id).await?.raw))
}

pub async fn list_sensors(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.sensors.list().await?.raw))
}

pub async fn get_sensor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.sensors.get(&id).await?.raw))
}
