#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Mock AIS-catcher feed used to exercise a vessel-tracking consumer
//! without receiving hardware. Broadcasts simulated vessel position
//! reports as newline-delimited JSON over TCP to any number of
//! connected clients, and ships the matching line decoder plus a
//! conformance check against the downstream normalizer contract.

pub mod client;
pub mod decoder;
pub mod error;
pub mod harness;
pub mod registry;
pub mod server;
pub mod settings;
pub mod simulator;
pub mod startup;
