//! # Gateway Framework
//!
//! Building blocks for an aggregation gateway: a service that reads from several upstream
//! services, validates what it reads, composes it into requests for a downstream service,
//! and reports every failure in one uniform shape.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Transport Layer** ([`Transport`]) - moves bytes. [`HttpTransport`] in production,
//!    [`mock::MockTransport`] in tests.
//! 2. **Forwarding Layer** ([`Forwarder`]) - one call, one normalized outcome
//!    ([`ForwardResponse`] or [`ForwardError`]).
//! 3. **Resource Layer** ([`ValidatedFetcher`], [`UpstreamClient`]) - fetch a named
//!    [`Resource`] and check its shape, failing with a [`ResourceError`] that names it.
//!
//! ## Error Normalization
//!
//! An upstream that answers with a non-success status and a `detail` (or `error`) field
//! produces a detail record with exactly five keys:
//!
//! ```json
//! { "error": "not found", "body": {...}, "method": "POST", "url": "...", "params": null }
//! ```
//!
//! `body`, `url` and `params` are each replaced by [`OVERSIZED_FIELD_PLACEHOLDER`] when
//! their JSON form is longer than [`MAX_DETAIL_FIELD_CHARS`] characters, so a rejected
//! request carrying a large room collection never echoes it back to the client.
//!
//! ## Concurrency Model
//!
//! Everything is request-scoped. The forwarder holds no state beyond the shared transport,
//! and there are no retries, caches or locks on the request path.
//!
//! ## Testing
//!
//! See the [`mock`] module for scripting upstream replies without sockets.

pub mod client_trait;
pub mod error;
pub mod fetcher;
pub mod forwarder;
pub mod mock;
pub mod request;
pub mod resource;
pub mod transport;

pub use client_trait::UpstreamClient;
pub use error::{
    ForwardError, RejectionDetail, ResourceError, UpstreamErrorDetail, MAX_DETAIL_FIELD_CHARS,
    OVERSIZED_FIELD_PLACEHOLDER,
};
pub use fetcher::{ValidatedFetcher, ValidatedPayload};
pub use forwarder::Forwarder;
pub use request::{ForwardRequest, ForwardResponse, QueryParams};
pub use resource::Resource;
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};

pub use reqwest::Method;
