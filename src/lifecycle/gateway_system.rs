use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use gateway_framework::{Forwarder, HttpTransport, Transport};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, Instrument};

use crate::artwork::ArtworkQueryBuilder;
use crate::clients::{PathfindingClient, RoomClient, SensorClient, SmkClient};
use crate::config::GatewayConfig;
use crate::path_orchestrator::PathOrchestrator;
use crate::routes::{self, AppState};

/// A running gateway: the bound address plus the handles needed to stop it.
pub struct GatewaySystem {
    pub local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl GatewaySystem {
    /// Binds `config.bind_addr` and serves over real HTTP upstreams.
    pub async fn start(config: GatewayConfig) -> std::io::Result<Self> {
        let transport = Arc::new(
            HttpTransport::new(config.upstream_timeout).map_err(std::io::Error::other)?,
        );
        let listener = TcpListener::bind(config.bind_addr).await?;
        Self::serve(listener, Self::router_with_transport(&config, transport))
    }

    /// Serves `router` on an already bound listener.
    pub fn serve(listener: TcpListener, router: Router) -> std::io::Result<Self> {
        let local_addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let span = tracing::info_span!("gateway", %local_addr);
        let handle = tokio::spawn(
            async move {
                info!("Gateway listening");
                let result = axum::serve(listener, router)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown_rx.await;
                    })
                    .await;
                info!("Gateway stopped");
                result
            }
            .instrument(span),
        );

        Ok(Self {
            local_addr,
            shutdown_tx,
            handle,
        })
    }

    /// The production router over an arbitrary transport.
    pub fn router_with_transport(config: &GatewayConfig, transport: Arc<dyn Transport>) -> Router {
        let forwarder = Forwarder::new(transport);

        let rooms = RoomClient::new(forwarder.clone(), config.sensor_sim_url.clone());
        let sensors = SensorClient::new(forwarder.clone(), config.sensor_sim_url.clone());
        let pathfinding = PathfindingClient::new(forwarder.clone(), config.pathfinding_url.clone());
        let smk = SmkClient::new(forwarder, config.smk_api_url.clone());

        let state = AppState {
            paths: PathOrchestrator::new(rooms.clone(), sensors.clone(), pathfinding)
                .with_concurrent_fetch(config.concurrent_fetch),
            artwork: ArtworkQueryBuilder::new(rooms.clone(), smk),
            rooms,
            sensors,
        };

        routes::router(state, &config.cors_origins)
    }

    /// Stops accepting connections and waits for in-flight requests to finish.
    pub async fn shutdown(self) -> std::io::Result<()> {
        let _ = self.shutdown_tx.send(());
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(std::io::Error::other(e)),
        }
    }
}
