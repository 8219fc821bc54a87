//! # Forwarder
//!
//! Issues exactly one outbound call through a [`Transport`] and normalizes the outcome:
//!
//! | Outcome | Result |
//! |---------|--------|
//! | No HTTP response | [`ForwardError::Unreachable`] |
//! | 2xx with a JSON (or empty) body | [`ForwardResponse`] with payload and status |
//! | 2xx with a malformed body | [`ForwardError::Unreachable`] |
//! | non-2xx with a `detail`/`error` field | [`ForwardError::UpstreamRejected`] + [`RejectionDetail::Structured`] |
//! | any other non-2xx | [`ForwardError::UpstreamRejected`] + [`RejectionDetail::Raw`] |
//!
//! There are no retries. Every call is logged once with its method, URL and status.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{ForwardError, RejectionDetail, UpstreamErrorDetail};
use crate::request::{ForwardRequest, ForwardResponse, QueryParams};
use crate::transport::Transport;

#[derive(Clone)]
pub struct Forwarder {
    transport: Arc<dyn Transport>,
}

impl Forwarder {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    #[instrument(skip_all, fields(method = %request.method, url = %request.url))]
    pub async fn forward(&self, request: ForwardRequest) -> Result<ForwardResponse, ForwardError> {
        let raw = match self.transport.send(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Upstream unreachable");
                return Err(ForwardError::Unreachable {
                    method: request.method.to_string(),
                    url: request.url,
                    reason: e.to_string(),
                });
            }
        };

        if (200..300).contains(&raw.status) {
            let payload = parse_payload(&raw.body).map_err(|e| {
                warn!(status = raw.status, error = %e, "Malformed upstream response");
                ForwardError::Unreachable {
                    method: request.method.to_string(),
                    url: request.url.clone(),
                    reason: format!("malformed response body: {e}"),
                }
            })?;
            debug!(status = raw.status, "Upstream responded");
            return Ok(ForwardResponse {
                payload,
                status: raw.status,
            });
        }

        warn!(status = raw.status, "Upstream rejected request");
        let detail = rejection_detail(&request, &raw.body);
        Err(ForwardError::UpstreamRejected {
            status: raw.status,
            method: request.method.to_string(),
            url: request.url,
            detail,
        })
    }
}

fn parse_payload(body: &[u8]) -> Result<Value, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
}

fn rejection_detail(request: &ForwardRequest, body: &[u8]) -> RejectionDetail {
    let parsed: Option<Value> = serde_json::from_slice(body).ok();
    let error = parsed
        .as_ref()
        .and_then(|v| v.get("detail").or_else(|| v.get("error")))
        .filter(|v| !v.is_null())
        .cloned();

    match (error, parsed) {
        (Some(error), _) => RejectionDetail::Structured(UpstreamErrorDetail::capped(
            error,
            request.body.clone().unwrap_or(Value::Null),
            request.method.to_string(),
            &request.url,
            request
                .params
                .as_ref()
                .map(QueryParams::to_value)
                .unwrap_or(Value::Null),
        )),
        (None, Some(value)) => RejectionDetail::Raw(value),
        (None, None) => RejectionDetail::Raw(Value::String(
            String::from_utf8_lossy(body).into_owned(),
        )),
    }
}
