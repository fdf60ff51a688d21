use std::process::ExitCode;

use ais_feed::{
    client::{StreamClient, StreamEnd},
    error::{ConfigSnafu, Result},
    harness,
    settings::Settings,
    startup::App,
};
use clap::{CommandFactory, Parser};
use snafu::ResultExt;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Mock AIS-catcher feed for exercising vessel-tracking consumers", long_about = None)]
struct Args {
    /// Run the broadcast server.
    #[arg(long)]
    server: bool,

    /// Connect to a running server and decode a handful of records.
    #[arg(long)]
    client: bool,

    /// Check the wire schema against the downstream normalizer.
    #[arg(long)]
    parse: bool,

    /// TCP port to listen on or connect to.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let mut settings = Settings::new().context(ConfigSnafu)?;
    if let Some(port) = args.port {
        settings.port = port;
    }

    if args.server {
        App::build(&settings).await?.run().await
    } else if args.client {
        let client = StreamClient::new(
            settings.listen_address(),
            settings.max_records,
            settings.idle_timeout,
        );
        let summary = client.run().await?;
        match summary.end {
            StreamEnd::Complete => {
                info!(
                    records = summary.records.len(),
                    "received all requested records"
                );
            }
            StreamEnd::Eof => {
                info!(records = summary.records.len(), "server closed the stream");
            }
            StreamEnd::IdleTimeout => {
                warn!(
                    records = summary.records.len(),
                    "timed out waiting for records, is the server running?"
                );
            }
        }
        Ok(())
    } else if args.parse {
        harness::run_conformance()
    } else {
        let _ = Args::command().print_help();
        Ok(())
    }
}
