use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::{error::Result, server::BroadcastServer, settings::Settings};

pub struct App {
    server: BroadcastServer,
}

impl App {
    pub async fn build(settings: &Settings) -> Result<App> {
        Ok(App {
            server: BroadcastServer::bind(settings).await?,
        })
    }

    /// Runs the server until it fails or the process receives ctrl-c.
    pub async fn run(self) -> Result<()> {
        let shutdown = CancellationToken::new();

        let signal = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("shutdown signal received");
                signal.cancel();
            }
        });

        self.server.run(shutdown).await
    }
}
