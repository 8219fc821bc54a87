use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Client body for `POST /fastest-path`.
#[derive(Debug, Clone, Deserialize)]
pub struct PathRequest {
    pub source: String,
    pub target: String,
}

/// Client body for `POST /multi-point-path`.
#[derive(Debug, Clone, Deserialize)]
pub struct MultiPathRequest {
    pub source: String,
    pub targets: Vec<String>,
}

/// Body sent to `POST {PATHFINDING}/fastest-path`.
///
/// `rooms` and `sensors` are the validated upstream arrays, forwarded verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct FastestPathPayload {
    pub source_room: String,
    pub target_room: String,
    pub rooms: Value,
    pub sensors: Value,
}

impl FastestPathPayload {
    pub fn into_body(self) -> Value {
        json!({
            "source_room": self.source_room,
            "target_room": self.target_room,
            "rooms": self.rooms,
            "sensors": self.sensors,
        })
    }
}

/// Body sent to `POST {PATHFINDING}/multiple-points`.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPointPayload {
    pub source_room: String,
    pub target_rooms: Vec<String>,
    pub rooms: Value,
    pub sensors: Value,
}

impl MultiPointPayload {
    pub fn into_body(self) -> Value {
        json!({
            "source_room": self.source_room,
            "target_rooms": self.target_rooms,
            "rooms": self.rooms,
            "sensors": self.sensors,
        })
    }
}

/// What the pathfinding service must answer with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub fastest_path: Vec<String>,
    pub distance: f64,
}
