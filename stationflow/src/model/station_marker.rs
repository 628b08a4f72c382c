use geo::Point;
use geojson::{feature::Id, Feature, Geometry, Value};
use serde::Serialize;
use stationflow_core::{
    model::Station,
    scale::{FlowBucket, RadiusScale},
};

use super::StationFlowError;

/// everything a renderer needs to draw one station circle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StationMarker {
    pub short_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip)]
    pub coord: Point<f64>,
    pub radius: f64,
    pub departure_ratio: f64,
    pub arrivals: u64,
    pub departures: u64,
    pub total_traffic: u64,
    pub tooltip: String,
}

impl StationMarker {
    pub fn new(station: &Station, scale: &RadiusScale) -> StationMarker {
        let traffic = station.traffic;
        StationMarker {
            short_name: station.short_name.clone(),
            name: station.name.clone(),
            coord: station.coord,
            radius: scale.radius(traffic.total_traffic()),
            departure_ratio: FlowBucket::from_traffic(&traffic).value(),
            arrivals: traffic.arrivals(),
            departures: traffic.departures(),
            total_traffic: traffic.total_traffic(),
            tooltip: traffic.to_string(),
        }
    }

    /// GeoJSON point feature keyed by `short_name` with the marker fields as
    /// properties.
    pub fn to_feature(&self) -> Result<Feature, StationFlowError> {
        let properties = match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        };
        Ok(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![
                self.coord.x(),
                self.coord.y(),
            ]))),
            id: Some(Id::String(self.short_name.clone())),
            properties,
            foreign_members: None,
        })
    }
}
