//! # Room Client
//!
//! Reads rooms from the sensor simulation service. `list()` and `get()` come from
//! [`UpstreamClient`]; this type only pins the resource and the base URL.
use crate::model::Rooms;
use gateway_framework::{Forwarder, UpstreamClient, ValidatedFetcher};

/// Client for the room collection.
#[derive(Clone)]
pub struct RoomClient {
    fetcher: ValidatedFetcher<Rooms>,
}

impl RoomClient {
    pub fn new(forwarder: Forwarder, sensor_sim_url: impl Into<String>) -> Self {
        Self {
            fetcher: ValidatedFetcher::new(forwarder, sensor_sim_url),
        }
    }
}

impl UpstreamClient<Rooms> for RoomClient {
    fn fetcher(&self) -> &ValidatedFetcher<Rooms> {
        &self.fetcher
    }
}
