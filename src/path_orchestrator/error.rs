//! Error types for path computation.

use gateway_framework::{ForwardError, ResourceError};
use thiserror::Error;

/// Errors that can occur while computing a path.
#[derive(Debug, Clone, Error)]
pub enum PathError {
    /// The client request is malformed. No upstream was contacted.
    #[error("{0}")]
    Validation(String),

    /// Rooms or sensors could not be fetched or failed the shape check.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// None of the requested target names matched a room.
    #[error("No valid target rooms found in the request.")]
    NoValidTargets,

    /// The pathfinding call failed or was rejected.
    #[error("Error communicating with pathfinding service")]
    Downstream(#[source] ForwardError),

    /// The pathfinding service answered with something that is not a path.
    #[error("Invalid pathfinding response")]
    InvalidResponse { reason: String },
}
