use gateway_framework::Resource;
use serde::{Deserialize, Serialize};

/// A sensor placed between one or more rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: String,
    pub rooms: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_vertical: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorList {
    pub sensors: Vec<Sensor>,
}

/// Resource marker for the sensor collection.
pub struct Sensors;

impl Resource for Sensors {
    const NAME: &'static str = "sensor";
    const PATH: &'static str = "sensors";
    type Collection = SensorList;
    type Item = Sensor;
}
