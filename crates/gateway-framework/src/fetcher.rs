//! # ValidatedFetcher
//!
//! Wraps the [`Forwarder`] with a shape check for one [`Resource`].
//!
//! - Any forwarding failure of a collection fetch becomes [`ResourceError::FetchFailed`].
//! - A payload that does not deserialize into the resource shape becomes
//!   [`ResourceError::InvalidShape`].
//! - Single-item lookups keep the upstream outcome in [`ResourceError::Lookup`], so a 404
//!   from the upstream stays a 404.

use std::marker::PhantomData;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{ForwardError, ResourceError};
use crate::forwarder::Forwarder;
use crate::request::ForwardRequest;
use crate::resource::Resource;

/// A payload that passed validation: the untouched JSON plus its typed view.
#[derive(Debug, Clone)]
pub struct ValidatedPayload<T> {
    pub raw: Value,
    pub parsed: T,
}

pub struct ValidatedFetcher<R: Resource> {
    forwarder: Forwarder,
    base_url: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ValidatedFetcher<R> {
    fn clone(&self) -> Self {
        Self {
            forwarder: self.forwarder.clone(),
            base_url: self.base_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ValidatedFetcher<R> {
    pub fn new(forwarder: Forwarder, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            forwarder,
            base_url: base_url.trim_end_matches('/').to_string(),
            _resource: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, R::PATH)
    }

    /// The id is appended as one percent-encoded path segment, so `?`, `#` and `/`
    /// never leave it. `None` when the base URL cannot carry path segments.
    pub fn item_url(&self, id: &str) -> Option<String> {
        let mut url = Url::parse(&self.collection_url()).ok()?;
        url.path_segments_mut().ok()?.push(id);
        Some(url.into())
    }

    /// Fetches the whole collection and checks it against `R::Collection`.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn fetch_and_validate(&self) -> Result<ValidatedPayload<R::Collection>, ResourceError> {
        let response = self
            .forwarder
            .forward(ForwardRequest::get(self.collection_url()))
            .await
            .map_err(|source| {
                warn!(error = %source, "Fetch failed");
                ResourceError::FetchFailed {
                    resource: R::NAME,
                    source,
                }
            })?;

        let parsed = validate::<R::Collection>(R::NAME, &response.payload)?;
        debug!("Collection validated");
        Ok(ValidatedPayload {
            raw: response.payload,
            parsed,
        })
    }

    /// Fetches one item by id and checks it against `R::Item`.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn fetch_item(&self, id: &str) -> Result<ValidatedPayload<R::Item>, ResourceError> {
        let url = self.item_url(id).ok_or_else(|| ResourceError::Lookup {
            resource: R::NAME,
            source: ForwardError::Unreachable {
                method: "GET".to_string(),
                url: self.collection_url(),
                reason: "base URL cannot carry an item path".to_string(),
            },
        })?;
        let response = self
            .forwarder
            .forward(ForwardRequest::get(url))
            .await
            .map_err(|source| ResourceError::Lookup {
                resource: R::NAME,
                source,
            })?;

        let parsed = validate::<R::Item>(R::NAME, &response.payload)?;
        Ok(ValidatedPayload {
            raw: response.payload,
            parsed,
        })
    }
}

fn validate<T: DeserializeOwned>(resource: &'static str, payload: &Value) -> Result<T, ResourceError> {
    T::deserialize(payload).map_err(|e| {
        warn!(resource, error = %e, "Shape check failed");
        ResourceError::InvalidShape {
            resource,
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Door {
        id: String,
        width: f64,
    }

    #[derive(Debug, Deserialize)]
    struct DoorList {
        doors: Vec<Door>,
    }

    struct Doors;

    impl Resource for Doors {
        const NAME: &'static str = "door";
        const PATH: &'static str = "doors";
        type Collection = DoorList;
        type Item = Door;
    }

    fn fetcher(mock: &MockTransport) -> ValidatedFetcher<Doors> {
        ValidatedFetcher::new(Forwarder::new(Arc::new(mock.clone())), "http://sim/")
    }

    #[tokio::test]
    async fn returns_raw_payload_unmodified() {
        let mock = MockTransport::new();
        let payload = json!({
            "doors": [{ "id": "d1", "width": 1.5, "colour": "red" }],
            "extra": true,
        });
        mock.expect_get("http://sim/doors").return_json(200, payload.clone());

        let validated = fetcher(&mock).fetch_and_validate().await.unwrap();

        assert_eq!(validated.raw, payload);
        assert_eq!(validated.parsed.doors.len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn wrong_shape_is_invalid_shape() {
        let mock = MockTransport::new();
        mock.expect_get("http://sim/doors")
            .return_json(200, json!({ "doors": [{ "id": 7 }] }));

        let err = fetcher(&mock).fetch_and_validate().await.unwrap_err();

        assert!(matches!(err, ResourceError::InvalidShape { resource: "door", .. }));
        assert_eq!(
            err.to_string(),
            "Invalid or empty door data received from sensor simulation service"
        );
    }

    #[tokio::test]
    async fn empty_payload_is_invalid_shape() {
        let mock = MockTransport::new();
        mock.expect_get("http://sim/doors").return_body(200, Vec::new());

        let err = fetcher(&mock).fetch_and_validate().await.unwrap_err();

        assert!(matches!(err, ResourceError::InvalidShape { .. }));
    }

    #[tokio::test]
    async fn forward_failure_is_fetch_failed() {
        let mock = MockTransport::new();
        mock.expect_get("http://sim/doors").return_unreachable("timeout");

        let err = fetcher(&mock).fetch_and_validate().await.unwrap_err();

        assert!(matches!(
            err,
            ResourceError::FetchFailed { resource: "door", source: ForwardError::Unreachable { .. } }
        ));
        assert_eq!(
            err.to_string(),
            "Failed to retrieve door data from sensor simulation service"
        );
    }

    #[tokio::test]
    async fn item_rejection_keeps_upstream_status() {
        let mock = MockTransport::new();
        mock.expect_get("http://sim/doors/d9")
            .return_json(404, json!({ "detail": "Door not found" }));

        let err = fetcher(&mock).fetch_item("d9").await.unwrap_err();

        let ResourceError::Lookup { source, .. } = err else {
            panic!("expected lookup error");
        };
        assert_eq!(source.status(), Some(404));
    }

    #[tokio::test]
    async fn item_is_validated() {
        let mock = MockTransport::new();
        mock.expect_get("http://sim/doors/d1")
            .return_json(200, json!({ "id": "d1", "width": 0.9 }));

        let item = fetcher(&mock).fetch_item("d1").await.unwrap();

        assert_eq!(item.parsed.id, "d1");
        assert_eq!(item.raw["width"], json!(0.9));
    }

    #[tokio::test]
    async fn item_id_stays_inside_one_path_segment() {
        let mock = MockTransport::new();
        mock.expect_get("http://sim/doors/x%3Fadmin=1")
            .return_json(404, json!({ "detail": "Door not found" }));
        mock.expect_get("http://sim/doors/..%2Fsensors")
            .return_json(404, json!({ "detail": "Door not found" }));

        let fetcher = fetcher(&mock);
        assert!(fetcher.fetch_item("x?admin=1").await.is_err());
        assert!(fetcher.fetch_item("../sensors").await.is_err());

        let urls: Vec<String> = mock.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec!["http://sim/doors/x%3Fadmin=1", "http://sim/doors/..%2Fsensors"]
        );
        mock.verify();
    }

    #[test]
    fn item_url_encodes_reserved_characters() {
        let fetcher = fetcher(&MockTransport::new());
        assert_eq!(
            fetcher.item_url("a b#c").as_deref(),
            Some("http://sim/doors/a%20b%23c")
        );
        assert_eq!(fetcher.item_url("d1").as_deref(), Some("http://sim/doors/d1"));
    }
}
