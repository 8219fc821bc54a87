//! # Path Orchestration
//!
//! Turns "fetch rooms, fetch sensors, validate both, build payload, ask the pathfinding
//! service" into a single fail-fast operation.
//!
//! ```text
//! validate input ──► rooms ──► sensors ──► compose payload ──► POST pathfinding ──► validate
//!        │             │          │                                  │                │
//!        └─ 400        └─ 500     └─ 500                             └─ status/500    └─ 500
//! ```
//!
//! Input is checked before any network call. Rooms and sensors are fetched once per
//! request as whole snapshots; by default one after the other so a room failure never
//! touches the sensor service. With concurrent fetching enabled both requests run as
//! separate tasks: the first failure is returned immediately while the other request
//! is left to finish in the background and its result is discarded.
//!
//! `source` and `target` are forwarded exactly as received; whitespace only matters
//! for the blank check. Target room names are trimmed before matching.
//!
//! The downstream result is always checked against [`PathResult`], for single and
//! multi-target requests alike, and returned to the client unchanged.

pub mod error;

pub use error::*;

use crate::clients::{PathfindingClient, RoomClient, SensorClient};
use crate::model::{
    FastestPathPayload, MultiPointPayload, PathResult, RoomList, Rooms, SensorList, Sensors,
};
use gateway_framework::{ForwardError, Resource, ResourceError, UpstreamClient, ValidatedPayload};
use serde::Deserialize;
use serde_json::Value;
use tokio::task::JoinError;
use tracing::{debug, info, instrument, warn, Instrument};

type Snapshots = (ValidatedPayload<RoomList>, ValidatedPayload<SensorList>);

#[derive(Clone)]
pub struct PathOrchestrator {
    rooms: RoomClient,
    sensors: SensorClient,
    pathfinding: PathfindingClient,
    concurrent_fetch: bool,
}

impl PathOrchestrator {
    pub fn new(rooms: RoomClient, sensors: SensorClient, pathfinding: PathfindingClient) -> Self {
        Self {
            rooms,
            sensors,
            pathfinding,
            concurrent_fetch: false,
        }
    }

    pub fn with_concurrent_fetch(mut self, enabled: bool) -> Self {
        self.concurrent_fetch = enabled;
        self
    }

    /// Fastest path between two rooms.
    #[instrument(skip(self))]
    pub async fn compute_path(
        &self,
        source: &str,
        target: &str,
    ) -> Result<ValidatedPayload<PathResult>, PathError> {
        if non_blank(source).is_none() || non_blank(target).is_none() {
            return Err(PathError::Validation(
                "Both 'source' and 'target' must be non-empty strings.".to_string(),
            ));
        }

        let (rooms, sensors) = self.fetch_snapshots().await?;
        let payload = fastest_path_payload(source, target, &rooms.raw, &sensors.raw);

        let response = self
            .pathfinding
            .fastest_path(payload)
            .await
            .map_err(PathError::Downstream)?;

        let result = validate_result(response.payload)?;
        info!(distance = result.parsed.distance, "Path computed");
        Ok(result)
    }

    /// Path from `source` visiting every resolvable target room.
    ///
    /// Targets are room names. Each resolves to the id of the first room with that exact
    /// name; names without a match are dropped.
    #[instrument(skip(self))]
    pub async fn compute_multi_path(
        &self,
        source: &str,
        targets: &[String],
    ) -> Result<ValidatedPayload<PathResult>, PathError> {
        if non_blank(source).is_none() {
            return Err(PathError::Validation(
                "Field 'source' must be a non-empty string.".to_string(),
            ));
        }
        if targets.is_empty() {
            return Err(PathError::Validation(
                "Field 'targets' must be a non-empty list.".to_string(),
            ));
        }
        let target_names = targets
            .iter()
            .map(|name| non_blank(name))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                PathError::Validation(
                    "Field 'targets' must contain only non-empty strings.".to_string(),
                )
            })?;

        let (rooms, sensors) = self.fetch_snapshots().await?;

        let target_rooms = resolve_targets(&rooms.parsed, &target_names);
        if target_rooms.is_empty() {
            warn!(?target_names, "No target matched a room");
            return Err(PathError::NoValidTargets);
        }
        debug!(resolved = target_rooms.len(), requested = target_names.len(), "Targets resolved");

        let payload = MultiPointPayload {
            source_room: source.to_string(),
            target_rooms,
            rooms: rooms.raw["rooms"].clone(),
            sensors: sensors.raw["sensors"].clone(),
        };
        let response = self
            .pathfinding
            .multiple_points(payload)
            .await
            .map_err(PathError::Downstream)?;

        let result = validate_result(response.payload)?;
        info!(distance = result.parsed.distance, "Multi-point path computed");
        Ok(result)
    }

    async fn fetch_snapshots(&self) -> Result<Snapshots, ResourceError> {
        if self.concurrent_fetch {
            return self.fetch_snapshots_concurrently().await;
        }
        let rooms = self.rooms.list().await?;
        let sensors = self.sensors.list().await?;
        Ok((rooms, sensors))
    }

    /// Both fetches run as their own tasks. The first failure is returned at once; the
    /// other task is detached, runs to completion and its result is dropped.
    async fn fetch_snapshots_concurrently(&self) -> Result<Snapshots, ResourceError> {
        let rooms = self.rooms.clone();
        let sensors = self.sensors.clone();
        let rooms_url = rooms.fetcher().collection_url();
        let sensors_url = sensors.fetcher().collection_url();

        let mut rooms_task = tokio::spawn(async move { rooms.list().await }.in_current_span());
        let mut sensors_task = tokio::spawn(async move { sensors.list().await }.in_current_span());

        tokio::select! {
            joined = &mut rooms_task => {
                let rooms = join_outcome(joined, Rooms::NAME, rooms_url)?;
                let sensors = join_outcome(sensors_task.await, Sensors::NAME, sensors_url)?;
                Ok((rooms, sensors))
            }
            joined = &mut sensors_task => {
                let sensors = join_outcome(joined, Sensors::NAME, sensors_url)?;
                let rooms = join_outcome(rooms_task.await, Rooms::NAME, rooms_url)?;
                Ok((rooms, sensors))
            }
        }
    }
}

/// A fetch task that panicked or was aborted counts as a failed fetch.
fn join_outcome<T>(
    joined: Result<Result<T, ResourceError>, JoinError>,
    resource: &'static str,
    url: String,
) -> Result<T, ResourceError> {
    joined.unwrap_or_else(|e| {
        warn!(resource, error = %e, "Fetch task did not complete");
        Err(ResourceError::FetchFailed {
            resource,
            source: ForwardError::Unreachable {
                method: "GET".to_string(),
                url,
                reason: e.to_string(),
            },
        })
    })
}

/// Composes the single-target payload from validated snapshots.
pub fn fastest_path_payload(
    source: &str,
    target: &str,
    rooms: &Value,
    sensors: &Value,
) -> FastestPathPayload {
    FastestPathPayload {
        source_room: source.to_string(),
        target_room: target.to_string(),
        rooms: rooms["rooms"].clone(),
        sensors: sensors["sensors"].clone(),
    }
}

/// Maps room names to ids, first match per name. Unknown names are skipped.
pub fn resolve_targets(rooms: &RoomList, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| rooms.id_by_name(name))
        .map(str::to_string)
        .collect()
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn validate_result(payload: Value) -> Result<ValidatedPayload<PathResult>, PathError> {
    match PathResult::deserialize(&payload) {
        Ok(parsed) => Ok(ValidatedPayload {
            raw: payload,
            parsed,
        }),
        Err(e) => {
            warn!(error = %e, "Pathfinding response failed the shape check");
            Err(PathError::InvalidResponse {
                reason: e.to_string(),
            })
        }
    }
}
