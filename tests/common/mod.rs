#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use gateway_framework::mock::MockTransport;
use gateway_framework::Forwarder;
use museum_gateway::clients::{PathfindingClient, RoomClient, SensorClient};
use museum_gateway::path_orchestrator::PathOrchestrator;
use museum_gateway::{GatewayConfig, GatewaySystem};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const SIM: &str = "http://sim";
pub const PATHS: &str = "http://paths";
pub const SMK: &str = "http://smk";

pub fn room(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "exhibition",
        "crowd_factor": 0.4,
        "popularity_factor": 1.2,
        "occupants": 7,
        "area": 85.5,
        "longitude": 12.5783,
        "latitude": 55.6888,
        "floor": 1,
        "borders": [[12.578, 55.688], [12.579, 55.689]],
    })
}

/// Two rooms share the name "Gallery"; the first one (`r2`) is the canonical match.
pub fn rooms_payload() -> Value {
    json!({ "rooms": [room("r1", "Lobby"), room("r2", "Gallery"), room("r3", "Gallery")] })
}

pub fn sensors_payload() -> Value {
    json!({ "sensors": [
        { "id": "s1", "rooms": ["r1", "r2"], "latitude": 55.6888, "longitude": 12.5783, "is_vertical": false },
        { "id": "s2", "rooms": ["r2", "r3"], "latitude": 55.6889, "longitude": 12.5784, "is_vertical": true },
    ]})
}

pub fn path_result() -> Value {
    json!({ "fastest_path": ["r1", "s1", "r2"], "distance": 10 })
}

pub fn config() -> GatewayConfig {
    GatewayConfig::from_lookup(|name| match name {
        "SENSOR_SIM" => Some(SIM.to_string()),
        "PATHFINDING" => Some(PATHS.to_string()),
        "SMK_API" => Some(SMK.to_string()),
        _ => None,
    })
    .expect("test config")
}

pub fn orchestrator(mock: &MockTransport) -> PathOrchestrator {
    let forwarder = Forwarder::new(Arc::new(mock.clone()));
    PathOrchestrator::new(
        RoomClient::new(forwarder.clone(), SIM),
        SensorClient::new(forwarder.clone(), SIM),
        PathfindingClient::new(forwarder, PATHS),
    )
}

pub fn expect_snapshots(mock: &MockTransport) {
    mock.expect_get(format!("{SIM}/rooms"))
        .return_json(200, rooms_payload());
    mock.expect_get(format!("{SIM}/sensors"))
        .return_json(200, sensors_payload());
}

pub fn app(mock: &MockTransport) -> Router {
    GatewaySystem::router_with_transport(&config(), Arc::new(mock.clone()))
}

/// Sends one request through the router and returns status and JSON body.
pub async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}
