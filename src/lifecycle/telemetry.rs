//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact, target-less `tracing` subscriber filtered by
//! `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run                        # one line per request and upstream call
//! RUST_LOG=debug cargo run                       # plus validation and resolution steps
//! RUST_LOG=museum_gateway=debug,tower_http=info  # per-crate filtering
//! ```
//!
//! A failed multi-point request at `info` reads like:
//!
//! ```text
//! INFO request{method=POST uri=/multi-point-path}: Multi-point path requested source="Lobby" targets=1
//! WARN request{..}:compute_multi_path{..}: No target matched a room target_names=["NoSuchRoom"]
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
