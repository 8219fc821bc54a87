//! # Outbound Requests
//!
//! Value types describing a single outbound HTTP call ([`ForwardRequest`]) and its
//! successful outcome ([`ForwardResponse`]).
//!
//! A request is built once per call and never mutated by the framework. This keeps
//! the error detail honest: the `method`, `url` and `params` reported in an
//! `UpstreamRejected` detail are exactly what went over the wire.

use reqwest::Method;
use serde_json::{Map, Value};

/// Ordered query parameters.
///
/// Repeated keys are allowed and preserved in insertion order, which the art search
/// API relies on for multi-valued parameters such as `facets=creator&facets=materials`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, keeping any earlier value for the same key.
    pub fn push(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    /// Appends a parameter only when a value is present.
    pub fn push_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value.to_string()),
            None => self,
        }
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value recorded for `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// JSON object view used in error details. Repeated keys collapse into an array.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.0 {
            match map.get_mut(key) {
                Some(Value::Array(values)) => values.push(Value::String(value.clone())),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, Value::String(value.clone())]);
                }
                None => {
                    map.insert(key.clone(), Value::String(value.clone()));
                }
            }
        }
        Value::Object(map)
    }
}

/// A single outbound call: method, target URL, optional query parameters and JSON body.
#[derive(Debug, Clone)]
pub struct ForwardRequest {
    pub method: Method,
    pub url: String,
    pub params: Option<QueryParams>,
    pub body: Option<Value>,
}

impl ForwardRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: None,
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, url).with_body(body)
    }

    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Successful (2xx) outcome of a forwarded call.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardResponse {
    pub payload: Value,
    pub status: u16,
}
