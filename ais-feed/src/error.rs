use std::net::SocketAddr;

use ais_core::Mmsi;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("failed to bind tcp listener on '{address}'"))]
    Bind {
        #[snafu(implicit)]
        location: Location,
        address: SocketAddr,
        source: std::io::Error,
    },
    #[snafu(display("failed to connect to '{address}'"))]
    Connect {
        #[snafu(implicit)]
        location: Location,
        address: SocketAddr,
        source: std::io::Error,
    },
    #[snafu(display("failed to serialize vessel record"))]
    Serialize {
        #[snafu(implicit)]
        location: Location,
        source: serde_json::Error,
    },
    #[snafu(display("invalid configuration"))]
    Config {
        #[snafu(implicit)]
        location: Location,
        source: config::ConfigError,
    },
    #[snafu(display("normalizer rejected the wire record of mmsi '{mmsi}'"))]
    Conformance {
        #[snafu(implicit)]
        location: Location,
        mmsi: Mmsi,
    },
    #[snafu(display("server worker exited abnormally"))]
    Join {
        #[snafu(implicit)]
        location: Location,
        source: tokio::task::JoinError,
    },
}
