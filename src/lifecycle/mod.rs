//! # System Lifecycle
//!
//! Wires configuration, transport, clients, services and routes into a running gateway,
//! and tears it down again.
//!
//! ## The GatewaySystem Pattern
//!
//! ```rust,ignore
//! let config = GatewayConfig::from_env()?;   // fails fast on missing upstreams
//! setup_tracing();
//!
//! let system = GatewaySystem::start(config).await?;
//! tokio::signal::ctrl_c().await?;
//! system.shutdown().await?;                 // stop accepting, drain in-flight requests
//! ```
//!
//! Construction order matters only in one direction: one shared [`Forwarder`] (and thus
//! one connection pool) feeds every client, the clients feed the orchestrators, and the
//! orchestrators feed the router state. Nothing points back up the chain.
//!
//! ## Testing
//!
//! [`GatewaySystem::router_with_transport`] builds the exact production router over any
//! [`Transport`](gateway_framework::Transport), which is how the router tests drive the
//! whole stack with a [`MockTransport`](gateway_framework::mock::MockTransport).
//!
//! [`Forwarder`]: gateway_framework::Forwarder

pub mod gateway_system;
pub mod telemetry;

pub use gateway_system::GatewaySystem;
pub use telemetry::setup_tracing;
