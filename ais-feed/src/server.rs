use std::{net::SocketAddr, sync::Arc, time::Duration};

use ais_core::VesselRecord;
use snafu::ResultExt;
use tokio::{
    io::AsyncReadExt,
    net::{TcpListener, tcp::OwnedReadHalf},
    task::JoinSet,
    time::MissedTickBehavior,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::{
    error::{BindSnafu, JoinSnafu, Result, SerializeSnafu},
    registry::{ConnectionId, ConnectionRegistry},
    settings::Settings,
    simulator::VesselSimulator,
};

/// TCP server mimicking `AIS-catcher -S <port> JSON`: every broadcast
/// tick it advances the fleet and fans each serialized record out to
/// all connected clients.
pub struct BroadcastServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    registry: Arc<ConnectionRegistry>,
    fleet: Vec<VesselRecord>,
    simulator: VesselSimulator,
    tick_interval: Duration,
}

impl BroadcastServer {
    /// Failing to bind is fatal, there is no feed without a listener.
    pub async fn bind(settings: &Settings) -> Result<Self> {
        let address = settings.listen_address();
        let listener = TcpListener::bind(address)
            .await
            .context(BindSnafu { address })?;
        let local_addr = listener.local_addr().context(BindSnafu { address })?;

        Ok(Self {
            listener,
            local_addr,
            registry: Arc::new(ConnectionRegistry::new()),
            fleet: VesselRecord::sample_fleet(),
            simulator: VesselSimulator::new(settings.simulator_seed),
            tick_interval: settings.tick_interval,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Runs the accept loop and the broadcaster until `shutdown` fires
    /// or either worker fails.
    pub async fn run(self, shutdown: CancellationToken) -> Result<()> {
        let Self {
            listener,
            local_addr,
            registry,
            fleet,
            simulator,
            tick_interval,
        } = self;

        info!(%local_addr, "mock ais feed listening");

        let mut set = JoinSet::new();
        set.spawn(accept_loop(listener, registry.clone(), shutdown.clone()));
        set.spawn(broadcast_loop(
            registry,
            fleet,
            simulator,
            tick_interval,
            shutdown,
        ));

        while let Some(result) = set.join_next().await {
            result.context(JoinSnafu)??;
        }
        Ok(())
    }
}

async fn accept_loop(
    listener: TcpListener,
    registry: Arc<ConnectionRegistry>,
    shutdown: CancellationToken,
) -> Result<()> {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            accepted = listener.accept() => match accepted {
                Ok((socket, peer)) => {
                    let (reader, writer) = socket.into_split();
                    let id = registry.add(writer).await;
                    info!(%id, %peer, "client connected");
                    tokio::spawn(watch_connection(
                        reader,
                        registry.clone(),
                        id,
                        shutdown.clone(),
                    ));
                }
                // Per-connection accept failures are not fatal.
                Err(e) => warn!("failed to accept connection: {e:?}"),
            },
        }
    }
}

/// Watches one admitted connection for peer closure or read errors and
/// deregisters it. Performs no message processing, clients are not
/// expected to send anything.
async fn watch_connection(
    mut reader: OwnedReadHalf,
    registry: Arc<ConnectionRegistry>,
    id: ConnectionId,
    shutdown: CancellationToken,
) {
    let mut buf = [0; 64];
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return,
            read = reader.read(&mut buf) => match read {
                Ok(n) if n > 0 => {}
                _ => break,
            },
        }
    }

    if registry.remove(id).await {
        info!(%id, "client disconnected");
    }
}

async fn broadcast_loop(
    registry: Arc<ConnectionRegistry>,
    mut fleet: Vec<VesselRecord>,
    mut simulator: VesselSimulator,
    tick_interval: Duration,
    shutdown: CancellationToken,
) -> Result<()> {
    let mut ticker = tokio::time::interval(tick_interval);
    // Tick spacing drifts by processing time instead of being phase
    // corrected.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            _ = ticker.tick() => broadcast_tick(&registry, &mut fleet, &mut simulator).await?,
        }
    }
}

/// Advances every vessel in fixed fleet order and fans its record out
/// to all registered connections. Within one tick all live clients see
/// the same records in the same serialized form.
async fn broadcast_tick(
    registry: &ConnectionRegistry,
    fleet: &mut [VesselRecord],
    simulator: &mut VesselSimulator,
) -> Result<()> {
    for vessel in fleet.iter_mut() {
        simulator.step(vessel);

        let mut line = serde_json::to_vec(vessel).context(SerializeSnafu)?;
        line.push(b'\n');

        let delivered = registry.broadcast(&line).await;
        if delivered > 0 {
            info!(
                mmsi = %vessel.mmsi,
                latitude = vessel.latitude,
                longitude = vessel.longitude,
                delivered,
                "sent position report"
            );
        }
    }
    Ok(())
}
