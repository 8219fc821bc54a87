//! # Mock Transport & Testing Guide
//!
//! [`MockTransport`] implements [`Transport`] entirely in memory. Tests queue the calls
//! they expect, each with a scripted reply, and the mock answers them without opening a
//! socket.
//!
//! ## When to use the mock vs a local server
//!
//! | Feature | MockTransport | Local axum server |
//! |---------|---------------|-------------------|
//! | **Speed** | Instant | Fast (binds a port) |
//! | **Determinism** | Fully deterministic | Subject to the OS network stack |
//! | **Call accounting** | `requests()` and `verify()` | Manual |
//! | **Use Case** | Orchestration logic around the forwarder | The HTTP wire path itself |
//! | **Error Injection** | `return_unreachable` | Stop the server |
//!
//! ## Matching rules
//!
//! Each incoming request consumes the oldest queued expectation with the same method and
//! URL. Expectations for different URLs may therefore be answered in any order, which
//! lets concurrent fetches run against the mock. A request with no matching expectation
//! panics and fails the test.
//!
//! ```rust
//! use std::sync::Arc;
//! use gateway_framework::mock::MockTransport;
//! use gateway_framework::{ForwardRequest, Forwarder};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("http://sim/rooms")
//!         .return_json(200, json!({ "rooms": [] }));
//!
//!     let forwarder = Forwarder::new(Arc::new(mock.clone()));
//!     let response = forwarder
//!         .forward(ForwardRequest::get("http://sim/rooms"))
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(response.status, 200);
//!     assert_eq!(mock.requests().len(), 1);
//!     mock.verify();
//! }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::request::ForwardRequest;
use crate::transport::{RawResponse, Transport, TransportError};

enum Reply {
    Respond(RawResponse),
    Unreachable(String),
}

struct Expectation {
    method: Method,
    url: String,
    reply: Reply,
}

/// An in-memory transport with expectation tracking.
///
/// Clones share the same queue and request log, so a test can keep one handle for
/// assertions while the code under test owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<ForwardRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a call with the given method and exact URL (without query string).
    pub fn expect(&self, method: Method, url: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            url: url.into(),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_get(&self, url: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::GET, url)
    }

    pub fn expect_post(&self, url: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::POST, url)
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<ForwardRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining: Vec<String> = self
            .expectations
            .lock()
            .unwrap()
            .iter()
            .map(|e| format!("{} {}", e.method, e.url))
            .collect();
        if !remaining.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                remaining.len(),
                remaining
            );
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &ForwardRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let expectation = {
            let mut exps = self.expectations.lock().unwrap();
            exps.iter()
                .position(|e| e.method == request.method && e.url == request.url)
                .and_then(|index| exps.remove(index))
        };

        match expectation {
            Some(Expectation {
                reply: Reply::Respond(response),
                ..
            }) => Ok(response),
            Some(Expectation {
                reply: Reply::Unreachable(reason),
                ..
            }) => Err(TransportError(reason)),
            None => panic!("Unexpected request: {} {}", request.method, request.url),
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    method: Method,
    url: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Replies with the given status and JSON body.
    pub fn return_json(self, status: u16, body: Value) {
        let body = serde_json::to_vec(&body).unwrap_or_default();
        self.push(Reply::Respond(RawResponse { status, body }));
    }

    /// Replies with the given status and raw body bytes.
    pub fn return_body(self, status: u16, body: impl Into<Vec<u8>>) {
        self.push(Reply::Respond(RawResponse {
            status,
            body: body.into(),
        }));
    }

    /// Fails the call as if the peer could not be reached.
    pub fn return_unreachable(self, reason: impl Into<String>) {
        self.push(Reply::Unreachable(reason.into()));
    }

    fn push(self, reply: Reply) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            url: self.url,
            reply,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn answers_matching_expectations_out_of_order() {
        let mock = MockTransport::new();
        mock.expect_get("http://sim/rooms")
            .return_json(200, json!({ "rooms": [] }));
        mock.expect_get("http://sim/sensors")
            .return_json(200, json!({ "sensors": [] }));

        let sensors = mock
            .send(&ForwardRequest::get("http://sim/sensors"))
            .await
            .unwrap();
        let rooms = mock
            .send(&ForwardRequest::get("http://sim/rooms"))
            .await
            .unwrap();

        assert_eq!(sensors.body, br#"{"sensors":[]}"#.to_vec());
        assert_eq!(rooms.body, br#"{"rooms":[]}"#.to_vec());
        assert_eq!(mock.requests().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected request")]
    async fn unexpected_request_panics() {
        let mock = MockTransport::new();
        let _ = mock.send(&ForwardRequest::get("http://sim/rooms")).await;
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn verify_reports_leftovers() {
        let mock = MockTransport::new();
        mock.expect_get("http://sim/rooms").return_unreachable("down");
        mock.verify();
    }
}
