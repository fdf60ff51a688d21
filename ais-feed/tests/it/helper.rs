use std::{net::SocketAddr, time::Duration};

use ais_feed::{decoder::RecordStream, server::BroadcastServer, settings::Settings};
use tokio::net::TcpStream;
use tokio_util::sync::CancellationToken;

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// A feed server bound to an ephemeral port, stopped on drop.
pub struct TestHelper {
    pub address: SocketAddr,
    shutdown: CancellationToken,
}

pub async fn spawn_server() -> TestHelper {
    let settings = Settings {
        port: 0,
        tick_interval: TICK_INTERVAL,
        max_records: 5,
        idle_timeout: Duration::from_secs(5),
        simulator_seed: Some(74),
    };

    let server = BroadcastServer::bind(&settings).await.unwrap();
    let address = server.local_addr();

    let shutdown = CancellationToken::new();
    tokio::spawn(server.run(shutdown.clone()));

    TestHelper { address, shutdown }
}

impl TestHelper {
    pub async fn connect(&self) -> RecordStream<TcpStream> {
        RecordStream::new(TcpStream::connect(self.address).await.unwrap())
    }

    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for TestHelper {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
