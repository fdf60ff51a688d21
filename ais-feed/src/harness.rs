use ais_core::{Mmsi, NavigationStatus, Normalize, NormalizedVessel, VesselRecord};
use num_traits::FromPrimitive;
use serde_json::Value;
use snafu::{OptionExt, ResultExt};
use tracing::info;

use crate::error::{ConformanceSnafu, Result, SerializeSnafu};

/// Reference copy of the downstream tracker's raw-record normalizer.
///
/// The feed only depends on this input/output contract: given one raw
/// wire object it either produces a vessel model with `name`, `lat`
/// and `lon` set, or nothing at all.
pub struct DownstreamNormalizer;

impl Normalize for DownstreamNormalizer {
    fn normalize(&self, raw: &Value) -> Option<NormalizedVessel> {
        let mmsi = i32::try_from(raw.get("mmsi")?.as_i64()?).ok()?;
        let name = raw.get("shipname")?.as_str()?;
        let lat = raw.get("latitude")?.as_f64()?;
        let lon = raw.get("longitude")?.as_f64()?;

        // The downstream drops reports carrying an unknown status code.
        let status = raw.get("status")?.as_i64()?;
        NavigationStatus::from_i64(status)?;

        if name.is_empty() {
            return None;
        }

        Some(NormalizedVessel {
            mmsi: Mmsi::new(mmsi),
            name: name.to_owned(),
            lat,
            lon,
        })
    }
}

/// Feeds every canonical fixture through the normalizer and fails on
/// the first record the downstream cannot use. This pins the wire
/// schema the rest of the feed must keep emitting.
pub fn run_conformance() -> Result<()> {
    let normalizer = DownstreamNormalizer;

    for vessel in VesselRecord::sample_fleet() {
        let raw = serde_json::to_value(&vessel).context(SerializeSnafu)?;
        let normalized = normalizer
            .normalize(&raw)
            .context(ConformanceSnafu { mmsi: vessel.mmsi })?;

        info!(
            mmsi = %normalized.mmsi,
            name = %normalized.name,
            lat = normalized.lat,
            lon = normalized.lon,
            "fixture accepted by the normalizer"
        );
    }

    Ok(())
}
