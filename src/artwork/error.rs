//! Error types for artwork queries.

use gateway_framework::{ForwardError, ResourceError};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ArtworkError {
    /// The client request is malformed.
    #[error("{0}")]
    Validation(String),

    /// The room filter could not be resolved to a room name.
    #[error(transparent)]
    RoomLookup(#[from] ResourceError),

    /// The search API could not be reached or refused the query.
    #[error("Error communicating with artwork search service")]
    Search(#[source] ForwardError),

    /// The search API answered with an unexpected shape.
    #[error("Invalid artwork search response")]
    InvalidResponse { reason: String },

    #[error("No filters found in the response.")]
    NoFilters,
}
