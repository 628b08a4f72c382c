use geo::Point;
use serde::{Deserialize, Serialize};

use super::StationTraffic;

/// a bike-share dock location, keyed by its `short_name`.
///
/// `coord` is stored x=longitude, y=latitude in decimal degrees. `traffic` is
/// derived data and is overwritten on every aggregation pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub coord: Point<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub traffic: StationTraffic,
}

impl Station {
    pub fn new(short_name: &str, lon: f64, lat: f64) -> Station {
        Station {
            short_name: short_name.to_string(),
            name: None,
            coord: Point::new(lon, lat),
            capacity: None,
            traffic: StationTraffic::default(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Station {
        self.name = Some(name.to_string());
        self
    }

    pub fn lon(&self) -> f64 {
        self.coord.x()
    }

    pub fn lat(&self) -> f64 {
        self.coord.y()
    }
}
