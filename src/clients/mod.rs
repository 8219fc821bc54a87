//! Typed wrappers around the [`Forwarder`](gateway_framework::Forwarder), one per upstream.

pub mod pathfinding_client;
pub mod room_client;
pub mod sensor_client;
pub mod smk_client;

pub use pathfinding_client::*;
pub use room_client::*;
pub use sensor_client::*;
pub use smk_client::*;
