use anyhow::Context;
use museum_gateway::lifecycle::{setup_tracing, GatewaySystem};
use museum_gateway::GatewayConfig;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::from_env().context("invalid gateway configuration")?;

    // Setup tracing once for the entire application
    setup_tracing();

    info!(
        sensor_sim = %config.sensor_sim_url,
        pathfinding = %config.pathfinding_url,
        concurrent_fetch = config.concurrent_fetch,
        "Starting gateway"
    );

    let span = tracing::info_span!("startup");
    let system = async {
        info!(addr = %config.bind_addr, "Binding listener");
        GatewaySystem::start(config.clone()).await
    }
    .instrument(span)
    .await
    .context("failed to start gateway")?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    info!("Shutdown requested");
    system.shutdown().await.context("gateway terminated with an error")?;

    info!("Gateway stopped cleanly");
    Ok(())
}
