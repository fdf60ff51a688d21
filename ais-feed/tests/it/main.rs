#![deny(warnings)]
#![deny(rust_2018_idioms)]

use ais_feed::settings::{DEFAULT_PORT, Settings};

pub mod client;
pub mod helper;
pub mod server;

#[test]
fn test_default_settings_are_valid() {
    let settings = Settings::new().unwrap();

    assert_eq!(settings.port, DEFAULT_PORT);
    assert_eq!(settings.tick_interval, std::time::Duration::from_secs(2));
    assert!(settings.max_records > 0);
    assert!(settings.simulator_seed.is_none());
}
