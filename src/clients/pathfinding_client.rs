//! # Pathfinding Client
//!
//! Posts composed payloads to the pathfinding service. The service is opaque: this
//! client does not look at the answer, the orchestrator validates it.
use crate::model::{FastestPathPayload, MultiPointPayload};
use gateway_framework::{ForwardError, ForwardRequest, ForwardResponse, Forwarder};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct PathfindingClient {
    forwarder: Forwarder,
    base_url: String,
}

impl PathfindingClient {
    pub fn new(forwarder: Forwarder, pathfinding_url: impl Into<String>) -> Self {
        let base_url: String = pathfinding_url.into();
        Self {
            forwarder,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn fastest_path_url(&self) -> String {
        format!("{}/fastest-path", self.base_url)
    }

    pub fn multiple_points_url(&self) -> String {
        format!("{}/multiple-points", self.base_url)
    }

    #[instrument(skip_all, fields(source = %payload.source_room, target = %payload.target_room))]
    pub async fn fastest_path(
        &self,
        payload: FastestPathPayload,
    ) -> Result<ForwardResponse, ForwardError> {
        debug!("Sending request");
        self.forwarder
            .forward(ForwardRequest::post(self.fastest_path_url(), payload.into_body()))
            .await
    }

    #[instrument(skip_all, fields(source = %payload.source_room, targets = payload.target_rooms.len()))]
    pub async fn multiple_points(
        &self,
        payload: MultiPointPayload,
    ) -> Result<ForwardResponse, ForwardError> {
        debug!("Sending request");
        self.forwarder
            .forward(ForwardRequest::post(self.multiple_points_url(), payload.into_body()))
            .await
    }
}
