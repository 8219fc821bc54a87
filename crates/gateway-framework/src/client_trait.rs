//! # UpstreamClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default `list` and
//! `get` methods built on top of a generic [`ValidatedFetcher`].
use crate::{Resource, ResourceError, ValidatedFetcher, ValidatedPayload};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use gateway_framework::{Forwarder, Resource, UpstreamClient, ValidatedFetcher};
/// use gateway_framework::mock::MockTransport;
/// use serde::Deserialize;
/// use std::sync::Arc;
///
/// #[derive(Deserialize)] struct Door { id: String }
/// #[derive(Deserialize)] struct DoorList { doors: Vec<Door> }
/// struct Doors;
/// impl Resource for Doors {
///     const NAME: &'static str = "door";
///     const PATH: &'static str = "doors";
///     type Collection = DoorList;
///     type Item = Door;
/// }
///
/// struct DoorClient {
///     fetcher: ValidatedFetcher<Doors>,
/// }
///
/// impl UpstreamClient<Doors> for DoorClient {
///     fn fetcher(&self) -> &ValidatedFetcher<Doors> {
///         &self.fetcher
///     }
/// }
///
/// async fn usage(client: DoorClient) {
///     // list() and get() are provided automatically
///     let _ = client.list().await;
///     let _ = client.get("d1").await;
/// }
/// ```
#[async_trait]
pub trait UpstreamClient<R: Resource>: Send + Sync {
    /// Access the inner generic fetcher.
    fn fetcher(&self) -> &ValidatedFetcher<R>;

    /// Fetch and validate the whole collection.
    #[tracing::instrument(skip(self), fields(resource = R::NAME))]
    async fn list(&self) -> Result<ValidatedPayload<R::Collection>, ResourceError> {
        tracing::debug!("Sending request");
        self.fetcher().fetch_and_validate().await
    }

    /// Fetch and validate a single item.
    #[tracing::instrument(skip(self), fields(resource = R::NAME))]
    async fn get(&self, id: &str) -> Result<ValidatedPayload<R::Item>, ResourceError> {
        tracing::debug!("Sending request");
        self.fetcher().fetch_item(id).await
    }
}
