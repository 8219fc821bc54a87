//! # Resource Trait
//!
//! The `Resource` trait describes an upstream data collection the gateway reads but never
//! mutates (rooms, sensors). It carries the name used in logs and error messages, the URL
//! path segment, and the shapes a valid payload must deserialize into.
//!
//! # Architecture Note
//! Writing the fetch-and-validate logic once against this trait means a new resource only
//! needs a marker type and two shapes:
//!
//! ```rust
//! use gateway_framework::Resource;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)] struct Door { id: String }
//! #[derive(Deserialize)] struct DoorList { doors: Vec<Door> }
//!
//! struct Doors;
//!
//! impl Resource for Doors {
//!     const NAME: &'static str = "door";
//!     const PATH: &'static str = "doors";
//!     type Collection = DoorList;
//!     type Item = Door;
//! }
//! ```
//!
//! The shapes are used for validation only. Callers always receive the raw payload
//! alongside the parsed view, so nothing the upstream sent is lost or reordered.

use serde::de::DeserializeOwned;

pub trait Resource: Send + Sync + 'static {
    /// Singular name used in messages, e.g. `"room"`.
    const NAME: &'static str;

    /// Path segment below the upstream base URL, e.g. `"rooms"`.
    const PATH: &'static str;

    /// Shape of `GET {base}/{PATH}`.
    type Collection: DeserializeOwned + Send + Sync;

    /// Shape of `GET {base}/{PATH}/{id}`.
    type Item: DeserializeOwned + Send + Sync;
}
