use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// The port AIS-catcher conventionally serves its JSON stream on.
pub const DEFAULT_PORT: u16 = 10110;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub port: u16,
    #[serde(with = "humantime_serde")]
    pub tick_interval: Duration,
    pub max_records: usize,
    #[serde(with = "humantime_serde")]
    pub idle_timeout: Duration,
    #[serde(default)]
    pub simulator_seed: Option<u64>,
}

impl Settings {
    /// Defaults overridable through `AIS_FEED_*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("port", DEFAULT_PORT as i64)?
            .set_default("tick_interval", "2s")?
            .set_default("max_records", 5_i64)?
            .set_default("idle_timeout", "10s")?
            .add_source(Environment::with_prefix("AIS_FEED"))
            .build()?
            .try_deserialize()
    }

    pub fn listen_address(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), self.port)
    }
}
