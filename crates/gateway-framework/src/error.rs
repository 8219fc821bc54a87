//! # Framework Errors
//!
//! Error types shared by every component that talks to an upstream or downstream service.
//!
//! - [`ForwardError`] describes what went wrong with a single outbound call.
//! - [`ResourceError`] describes what went wrong while fetching a named resource
//!   (rooms, sensors) and checking its shape.
//!
//! Both carry enough structure for the HTTP layer to pick a status code and render a
//! `detail` body without re-parsing messages.

use serde::Serialize;
use serde_json::Value;

/// Serialized fields longer than this are replaced by [`OVERSIZED_FIELD_PLACEHOLDER`].
pub const MAX_DETAIL_FIELD_CHARS: usize = 1000;

/// Stand-in for an oversized `body`, `url` or `params` value in an [`UpstreamErrorDetail`].
pub const OVERSIZED_FIELD_PLACEHOLDER: &str = "Too large to display";

/// Normalized detail for an upstream rejection that reported an error message.
///
/// Always carries all five keys. `body`, `url` and `params` are capped with
/// [`UpstreamErrorDetail::capped`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpstreamErrorDetail {
    pub error: Value,
    pub body: Value,
    pub method: String,
    pub url: Value,
    pub params: Value,
}

impl UpstreamErrorDetail {
    /// Builds a detail record, replacing any field whose JSON form exceeds
    /// [`MAX_DETAIL_FIELD_CHARS`] characters.
    pub fn capped(error: Value, body: Value, method: String, url: &str, params: Value) -> Self {
        Self {
            error,
            body: cap_field(body),
            method,
            url: cap_field(Value::String(url.to_string())),
            params: cap_field(params),
        }
    }
}

fn cap_field(value: Value) -> Value {
    let serialized_len = serde_json::to_string(&value)
        .map(|s| s.chars().count())
        .unwrap_or(usize::MAX);
    if serialized_len > MAX_DETAIL_FIELD_CHARS {
        Value::String(OVERSIZED_FIELD_PLACEHOLDER.to_string())
    } else {
        value
    }
}

/// What an upstream said when it refused a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RejectionDetail {
    /// The response carried a `detail` or `error` field.
    Structured(UpstreamErrorDetail),
    /// Anything else: the parsed JSON body, or the raw text when it was not JSON.
    Raw(Value),
}

impl RejectionDetail {
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Failure of a single outbound call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ForwardError {
    /// No usable HTTP response: connection refused, timeout, or a 2xx body that was not JSON.
    #[error("{method} {url} unreachable: {reason}")]
    Unreachable {
        method: String,
        url: String,
        reason: String,
    },

    /// The peer answered with a non-success status.
    #[error("{method} {url} rejected with status {status}")]
    UpstreamRejected {
        status: u16,
        method: String,
        url: String,
        detail: RejectionDetail,
    },
}

impl ForwardError {
    /// Upstream status code, when the peer answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ForwardError::Unreachable { .. } => None,
            ForwardError::UpstreamRejected { status, .. } => Some(*status),
        }
    }
}

/// Failure while fetching a named resource from the sensor simulation service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResourceError {
    /// The collection could not be fetched at all.
    #[error("Failed to retrieve {resource} data from sensor simulation service")]
    FetchFailed {
        resource: &'static str,
        #[source]
        source: ForwardError,
    },

    /// The payload arrived but did not match the resource shape.
    #[error("Invalid or empty {resource} data received from sensor simulation service")]
    InvalidShape {
        resource: &'static str,
        reason: String,
    },

    /// A single-item lookup was refused or failed; the upstream outcome is kept intact.
    #[error("{resource} lookup failed: {source}")]
    Lookup {
        resource: &'static str,
        #[source]
        source: ForwardError,
    },
}
