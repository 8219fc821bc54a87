//! # HTTP Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/fastest-path` | [`paths::fastest_path`] |
//! | POST | `/multi-point-path` | [`paths::multi_point_path`] |
//! | GET | `/rooms`, `/rooms/:id` | [`upstream`] |
//! | GET | `/sensors`, `/sensors/:id` | [`upstream`] |
//! | GET | `/artwork` | [`artwork::artwork`] |
//! | GET | `/filters` | [`artwork::filters`] |
//! | GET | `/search-artwork` | [`artwork::search_artwork`] |
//! | GET | `/health` | [`health`] |

pub mod artwork;
pub mod paths;
pub mod upstream;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::artwork::ArtworkQueryBuilder;
use crate::clients::{RoomClient, SensorClient};
use crate::config::CorsOrigins;
use crate::path_orchestrator::PathOrchestrator;

/// Shared handler state. Every field is a cheap clone over the same connection pool.
#[derive(Clone)]
pub struct AppState {
    pub paths: PathOrchestrator,
    pub artwork: ArtworkQueryBuilder,
    pub rooms: RoomClient,
    pub sensors: SensorClient,
}

pub fn router(state: AppState, cors_origins: &CorsOrigins) -> Router {
    Router::new()
        .route("/fastest-path", post(paths::fastest_path))
        .route("/multi-point-path", post(paths::multi_point_path))
        .route("/rooms", get(upstream::list_rooms))
        .route("/rooms/:id", get(upstream::get_room))
        .route("/sensors", get(upstream::list_sensors))
        .route("/sensors/:id", get(upstream::get_sensor))
        .route("/artwork", get(artwork::artwork))
        .route("/filters", get(artwork::filters))
        .route("/search-artwork", get(artwork::search_artwork))
        .route("/health", get(health))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origins {
        CorsOrigins::Any => layer.allow_origin(Any),
        CorsOrigins::List(origins) => layer.allow_origin(origins.clone()),
    }
}
