#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Domain types shared by the mock AIS feed: the wire-level vessel
//! record, its identifiers, and the contract of the downstream
//! normalizer that consumes the feed.

mod normalizer;
mod vessel;

pub use normalizer::*;
pub use vessel::*;
