//! # API Errors
//!
//! Every failure reaches the client as `{"detail": <string or object>}` with a status
//! chosen by the failure class:
//!
//! | Class | Status | Detail |
//! |-------|--------|--------|
//! | Validation | 400 | message naming the field |
//! | Malformed body / query | 422 | extractor message |
//! | Composition (no valid targets) | 400 | fixed message |
//! | Unreachable / invalid shape | 500 | stage-specific message |
//! | Upstream rejected | upstream status | capped `{error, body, method, url, params}` or raw body |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gateway_framework::{ForwardError, ResourceError};
use serde_json::{json, Value};

use crate::artwork::ArtworkError;
use crate::path_orchestrator::PathError;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<Value>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message.into())
    }

    /// A forwarding failure at a named stage. Rejections keep the upstream status and
    /// detail; anything else becomes a 500 carrying `unreachable_message`.
    pub fn from_forward(err: ForwardError, unreachable_message: impl Into<String>) -> Self {
        match err {
            ForwardError::UpstreamRejected { status, detail, .. } => Self::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                detail.to_value(),
            ),
            ForwardError::Unreachable { .. } => Self::internal(unreachable_message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<ResourceError> for ApiError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::Lookup { resource, source } => Self::from_forward(
                source,
                format!("Failed to retrieve {resource} data from sensor simulation service"),
            ),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<PathError> for ApiError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::Validation(message) => Self::bad_request(message),
            PathError::NoValidTargets => Self::bad_request(PathError::NoValidTargets.to_string()),
            PathError::Resource(err) => err.into(),
            PathError::Downstream(source) => Self::from_forward(
                source,
                "Error communicating with pathfinding service",
            ),
            err @ PathError::InvalidResponse { .. } => Self::internal(err.to_string()),
        }
    }
}

impl From<ArtworkError> for ApiError {
    fn from(err: ArtworkError) -> Self {
        match err {
            ArtworkError::Validation(message) => Self::bad_request(message),
            ArtworkError::RoomLookup(err) => err.into(),
            ArtworkError::Search(source) => Self::from_forward(
                source,
                "Error communicating with artwork search service",
            ),
            err @ (ArtworkError::InvalidResponse { .. } | ArtworkError::NoFilters) => {
                Self::internal(err.to_string())
            }
        }
    }
}
