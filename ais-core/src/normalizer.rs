use serde_json::Value;

use crate::Mmsi;

/// Vessel model used by the downstream tracking application.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedVessel {
    pub mmsi: Mmsi,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Contract of the downstream normalizer that converts one raw wire
/// record into the application's vessel model.
///
/// `None` signals a record the downstream cannot use, the feed treats
/// that as a schema incompatibility.
pub trait Normalize {
    fn normalize(&self, raw: &Value) -> Option<NormalizedVessel>;
}
