//! # Transport
//!
//! The [`Transport`] trait is the single seam between the gateway and the network.
//! Production code uses [`HttpTransport`] (reqwest); tests swap in
//! [`MockTransport`](crate::mock::MockTransport) to script responses without sockets.
//!
//! A transport only moves bytes. Deciding whether a status is a success, parsing JSON
//! and shaping errors is the [`Forwarder`](crate::Forwarder)'s job.

use std::time::Duration;

use async_trait::async_trait;

use crate::request::ForwardRequest;

/// Status and body of any HTTP response, success or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The call never produced an HTTP response.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ForwardRequest) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport sharing one connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds the shared client. Fails when the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ForwardRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self.client.request(request.method.clone(), &request.url);
        if let Some(params) = &request.params {
            builder = builder.query(params.pairs());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(format!("failed reading response body: {e}")))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::QueryParams;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    async fn spawn_server() -> String {
        let app = Router::new()
            .route(
                "/rooms",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    Json(json!({ "query": q }))
                }),
            )
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Json(json!({}))
                }),
            )
            .route(
                "/fastest-path",
                post(|Json(body): Json<Value>| async move {
                    (StatusCode::NOT_FOUND, Json(json!({ "detail": "not found", "echo": body })))
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn sends_query_parameters() {
        let base = spawn_server().await;
        let transport = HttpTransport::new(Duration::from_secs(5)).expect("client");

        let request = ForwardRequest::get(format!("{base}/rooms"))
            .with_params(QueryParams::new().push("keys", "*"));
        let response = transport.send(&request).await.expect("response");

        assert_eq!(response.status, 200);
        let body: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(body, json!({ "query": { "keys": "*" } }));
    }

    #[tokio::test]
    async fn non_success_status_is_not_a_transport_error() {
        let base = spawn_server().await;
        let transport = HttpTransport::new(Duration::from_secs(5)).expect("client");

        let request = ForwardRequest::post(format!("{base}/fastest-path"), json!({ "a": 1 }));
        let response = transport.send(&request).await.expect("response");

        assert_eq!(response.status, 404);
        let body: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(body["echo"], json!({ "a": 1 }));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let transport = HttpTransport::new(Duration::from_secs(2)).expect("client");
        let result = transport
            .send(&ForwardRequest::get(format!("http://{addr}/rooms")))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn configured_timeout_is_enforced() {
        let base = spawn_server().await;
        let transport = HttpTransport::new(Duration::from_millis(200)).expect("client");

        let result = transport
            .send(&ForwardRequest::get(format!("{base}/slow")))
            .await;

        assert!(result.is_err());
    }
}
