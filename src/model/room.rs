/// A room as reported by the sensor simulation service.
///
/// # Gateway Framework
/// [`Rooms`] implements the [`Resource`](gateway_framework::Resource) trait, so the
/// generic [`ValidatedFetcher`](gateway_framework::ValidatedFetcher) can fetch and check
/// `GET {SENSOR_SIM}/rooms` and `GET {SENSOR_SIM}/rooms/{id}` against these shapes.
use gateway_framework::Resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub crowd_factor: f64,
    pub popularity_factor: f64,
    pub occupants: i64,
    pub area: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub floor: i64,
    pub borders: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomList {
    pub rooms: Vec<Room>,
}

impl RoomList {
    /// Id of the first room whose name equals `name` exactly.
    pub fn id_by_name(&self, name: &str) -> Option<&str> {
        self.rooms
            .iter()
            .find(|room| room.name == name)
            .map(|room| room.id.as_str())
    }
}

/// Resource marker for the room collection.
pub struct Rooms;

impl Resource for Rooms {
    const NAME: &'static str = "room";
    const PATH: &'static str = "rooms";
    type Collection = RoomList;
    type Item = Room;
}
