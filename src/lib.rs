//! # Museum Gateway
//!
//! > **An aggregation gateway for a museum navigation system.**
//!
//! The gateway sits between the front end and three independent services:
//!
//! - the **sensor simulation service** (`SENSOR_SIM`): rooms and sensors,
//! - the **pathfinding service** (`PATHFINDING`): route computation over rooms and sensors,
//! - the **SMK art API** (`SMK_API`): artwork search and facets.
//!
//! It fetches and validates upstream data, composes it into pathfinding requests, and
//! reports every failure as `{"detail": ...}` with a stable status and message.
//!
//! ## 🚀 Core Components
//!
//! - **[`gateway_framework`]**: forwarding, error normalization and the generic
//!   validated fetcher.
//! - **[model]**: upstream records and request/response shapes.
//! - **[clients]**: one typed client per upstream.
//! - **[path_orchestrator]**: single and multi-target path composition.
//! - **[artwork]**: SMK search query building, filters and suggestions.
//! - **[routes]**: the axum HTTP surface.
//! - **[lifecycle]**: wiring, startup, shutdown and tracing.
//!
//! ## 🧪 Testing
//!
//! See [`gateway_framework::mock`] for scripting upstream replies without sockets, and
//! [`lifecycle::GatewaySystem::router_with_transport`] for driving the full router.

pub mod artwork;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod path_orchestrator;
pub mod routes;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use lifecycle::GatewaySystem;
