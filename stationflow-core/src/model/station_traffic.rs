use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// arrival and departure counts at a station. the total is always derived
/// from the two counts and is never stored on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StationTrafficRow", into = "StationTrafficRow")]
pub struct StationTraffic {
    arrivals: u64,
    departures: u64,
}

/// serialized form of [`StationTraffic`]. `total_traffic` is written for
/// consumers but ignored on read.
#[derive(Serialize, Deserialize)]
struct StationTrafficRow {
    arrivals: u64,
    departures: u64,
    #[serde(default)]
    total_traffic: u64,
}

impl StationTraffic {
    pub fn new(arrivals: u64, departures: u64) -> StationTraffic {
        StationTraffic {
            arrivals,
            departures,
        }
    }

    pub fn arrivals(&self) -> u64 {
        self.arrivals
    }

    pub fn departures(&self) -> u64 {
        self.departures
    }

    pub fn total_traffic(&self) -> u64 {
        self.arrivals + self.departures
    }

    /// share of this station's traffic that is departures. undefined (None)
    /// for a station with no traffic.
    pub fn departure_ratio(&self) -> Option<f64> {
        match self.total_traffic() {
            0 => None,
            total => Some(self.departures as f64 / total as f64),
        }
    }
}

impl From<StationTrafficRow> for StationTraffic {
    fn from(row: StationTrafficRow) -> Self {
        StationTraffic::new(row.arrivals, row.departures)
    }
}

impl From<StationTraffic> for StationTrafficRow {
    fn from(traffic: StationTraffic) -> Self {
        StationTrafficRow {
            arrivals: traffic.arrivals,
            departures: traffic.departures,
            total_traffic: traffic.total_traffic(),
        }
    }
}

/// tooltip text, e.g. `3 trips (2 departures, 1 arrivals)`
impl Display for StationTraffic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} trips ({} departures, {} arrivals)",
            self.total_traffic(),
            self.departures,
            self.arrivals
        )
    }
}
