use std::{fmt::Display, num::ParseIntError, str::FromStr};

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct Mmsi(i32);

impl Mmsi {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl FromStr for Mmsi {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<Mmsi> for i32 {
    fn from(value: Mmsi) -> Self {
        value.0
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    FromPrimitive,
    Eq,
    Serialize_repr,
    Deserialize_repr,
    strum::Display,
)]
#[repr(i32)]
pub enum NavigationStatus {
    #[strum(serialize = "Under way using engine")]
    UnderWayUsingEngine = 0,
    #[strum(serialize = "At anchor")]
    AtAnchor = 1,
    #[strum(serialize = "Not under command")]
    NotUnderCommand = 2,
    #[strum(serialize = "Restricted manoeuverability")]
    RestrictedManoeuverability = 3,
    #[strum(serialize = "Constrained by her draught")]
    ConstrainedByDraught = 4,
    #[strum(serialize = "Moored")]
    Moored = 5,
    #[strum(serialize = "Aground")]
    Aground = 6,
    #[strum(serialize = "Engaged in fishing")]
    EngagedInFishing = 7,
    #[strum(serialize = "Under way sailing")]
    UnderWaySailing = 8,
    #[strum(serialize = "Reserved")]
    Reserved9 = 9,
    #[strum(serialize = "Reserved")]
    Reserved10 = 10,
    #[strum(serialize = "Reserved")]
    Reserved11 = 11,
    #[strum(serialize = "Reserved")]
    Reserved12 = 12,
    #[strum(serialize = "Reserved")]
    Reserved13 = 13,
    #[strum(serialize = "AIS-SART is active")]
    AisSartIsActive = 14,
    #[strum(serialize = "Not defined")]
    NotDefined = 15,
}

/// One vessel report in the AIS-catcher `JSON_FULL` wire schema, sent
/// as a single newline-terminated JSON object.
///
/// `mmsi` never changes for the lifetime of a record, `speed` stays
/// non-negative, `course` stays within `[0, 360)` and `heading` is the
/// integer part of `course` after every motion step.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VesselRecord {
    pub mmsi: Mmsi,
    pub shipname: String,
    pub callsign: String,
    pub shiptype: i32,
    pub shiptype_text: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub course: f64,
    pub heading: i32,
    pub status: NavigationStatus,
    pub status_text: String,
    pub destination: String,
    pub to_bow: i32,
    pub to_stern: i32,
    pub to_port: i32,
    pub to_starboard: i32,
    #[serde(rename = "type")]
    pub message_type: u32,
}

impl VesselRecord {
    /// The canonical fleet the feed tracks. Created once at server
    /// start and mutated in place on every broadcast tick.
    pub fn sample_fleet() -> Vec<VesselRecord> {
        vec![
            VesselRecord {
                mmsi: Mmsi::new(316039000),
                shipname: "ATLANTIC EAGLE".into(),
                callsign: "CFG4521".into(),
                shiptype: 70,
                shiptype_text: "Cargo".into(),
                latitude: 45.5017,
                longitude: -73.5673,
                speed: 12.3,
                course: 45.0,
                heading: 47,
                status: NavigationStatus::UnderWayUsingEngine,
                status_text: NavigationStatus::UnderWayUsingEngine.to_string(),
                destination: "MONTREAL".into(),
                to_bow: 150,
                to_stern: 30,
                to_port: 15,
                to_starboard: 15,
                message_type: 1,
            },
            VesselRecord {
                mmsi: Mmsi::new(316007861),
                shipname: "PACIFIC STAR".into(),
                callsign: "CFG9912".into(),
                shiptype: 60,
                shiptype_text: "Passenger".into(),
                latitude: 45.4817,
                longitude: -73.5873,
                speed: 8.5,
                course: 270.0,
                heading: 268,
                status: NavigationStatus::UnderWayUsingEngine,
                status_text: NavigationStatus::UnderWayUsingEngine.to_string(),
                destination: "QUEBEC CITY".into(),
                to_bow: 200,
                to_stern: 50,
                to_port: 20,
                to_starboard: 20,
                message_type: 1,
            },
            VesselRecord {
                mmsi: Mmsi::new(316001103),
                shipname: "RIVER QUEEN".into(),
                callsign: "CFG1234".into(),
                shiptype: 52,
                shiptype_text: "Tug".into(),
                latitude: 45.5117,
                longitude: -73.5473,
                speed: 5.2,
                course: 180.0,
                heading: 182,
                status: NavigationStatus::UnderWayUsingEngine,
                status_text: NavigationStatus::UnderWayUsingEngine.to_string(),
                destination: "SOREL".into(),
                to_bow: 25,
                to_stern: 10,
                to_port: 5,
                to_starboard: 5,
                message_type: 1,
            },
        ]
    }
}
