use crate::model::Sensors;
use gateway_framework::{Forwarder, UpstreamClient, ValidatedFetcher};

/// Client for the sensor collection.
#[derive(Clone)]
pub struct SensorClient {
    fetcher: ValidatedFetcher<Sensors>,
}

impl SensorClient {
    pub fn new(forwarder: Forwarder, sensor_sim_url: impl Into<String>) -> Self {
        Self {
            fetcher: ValidatedFetcher::new(forwarder, sensor_sim_url),
        }
    }
}

impl UpstreamClient<Sensors> for SensorClient {
    fn fetcher(&self) -> &ValidatedFetcher<Sensors> {
        &self.fetcher
    }
}
