use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use super::AppState;
use crate::error::ApiError;
use crate::model::{ArtworkFilter, ArtworkPage, FilterGroup};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keys: String,
}

pub async fn artwork(
    State(state): State<AppState>,
    query: Result<Query<ArtworkFilter>, QueryRejection>,
) -> Result<Json<ArtworkPage>, ApiError> {
    let Query(filter) = query.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    Ok(Json(state.artwork.query_artwork(&filter).await?))
}

pub async fn filters(State(state): State<AppState>) -> Result<Json<Vec<FilterGroup>>, ApiError> {
    Ok(Json(state.artwork.filters().await?))
}

pub async fn search_artwork(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.artwork.search_suggestions(&query.keys).await?))
}
