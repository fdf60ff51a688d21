use std::{net::SocketAddr, time::Duration};

use ais_core::VesselRecord;
use snafu::ResultExt;
use tokio::net::TcpStream;
use tracing::info;

use crate::{
    decoder::RecordStream,
    error::{ConnectSnafu, Result},
};

/// Why a client session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The configured number of records was decoded.
    Complete,
    /// The server closed the stream.
    Eof,
    /// No record arrived within the idle timeout.
    IdleTimeout,
}

#[derive(Debug)]
pub struct StreamSummary {
    pub records: Vec<VesselRecord>,
    pub end: StreamEnd,
}

/// Test client consuming the feed the way the downstream tracker does.
pub struct StreamClient {
    address: SocketAddr,
    max_records: usize,
    idle_timeout: Duration,
}

impl StreamClient {
    pub fn new(address: SocketAddr, max_records: usize, idle_timeout: Duration) -> Self {
        Self {
            address,
            max_records,
            idle_timeout,
        }
    }

    /// Connects and decodes records until enough arrived, the stream
    /// ended, or the peer stayed silent past the idle timeout. A
    /// refused connection is an error; timeout and clean end of stream
    /// are ordinary, distinguishable outcomes.
    pub async fn run(&self) -> Result<StreamSummary> {
        let socket = TcpStream::connect(self.address)
            .await
            .context(ConnectSnafu {
                address: self.address,
            })?;
        let mut stream = RecordStream::new(socket);

        let mut records = Vec::with_capacity(self.max_records);
        let end = loop {
            if records.len() >= self.max_records {
                break StreamEnd::Complete;
            }
            match tokio::time::timeout(self.idle_timeout, stream.next()).await {
                Err(_) => break StreamEnd::IdleTimeout,
                Ok(None) => break StreamEnd::Eof,
                Ok(Some(record)) => {
                    info!(
                        mmsi = %record.mmsi,
                        shipname = %record.shipname,
                        latitude = record.latitude,
                        longitude = record.longitude,
                        "received position report"
                    );
                    records.push(record);
                }
            }
        };

        Ok(StreamSummary { records, end })
    }
}
