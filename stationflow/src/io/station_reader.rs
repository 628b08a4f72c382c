use std::{collections::HashSet, path::Path};

use serde::Deserialize;
use serde_json::Value;
use stationflow_core::model::Station;

use crate::model::StationFlowError;

#[derive(Deserialize)]
struct StationRecord {
    short_name: Option<StationId>,
    name: Option<String>,
    lat: Option<Coordinate>,
    lon: Option<Coordinate>,
    capacity: Option<Capacity>,
}

/// some feeds publish numeric station codes as JSON numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum StationId {
    Text(String),
    Number(serde_json::Number),
}

impl StationId {
    fn value(self) -> Option<String> {
        let id = match self {
            StationId::Text(s) => s.trim().to_string(),
            StationId::Number(n) => n.to_string(),
        };
        Some(id).filter(|s| !s.is_empty())
    }
}

/// feeds publish coordinates as numbers or as numeric strings
#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn value(&self) -> Option<f64> {
        let value = match self {
            Coordinate::Number(v) => Some(*v),
            Coordinate::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite())
    }
}

/// dock counts appear as integers, as floats such as `27.0`, or as strings
#[derive(Deserialize)]
#[serde(untagged)]
enum Capacity {
    Count(u64),
    Decimal(f64),
    Text(String),
}

impl Capacity {
    fn value(&self) -> Option<u32> {
        let decimal = match self {
            Capacity::Count(n) => return u32::try_from(*n).ok(),
            Capacity::Decimal(v) => *v,
            Capacity::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        let whole = decimal.is_finite() && decimal.fract() == 0.0;
        if whole && (0.0..=u32::MAX as f64).contains(&decimal) {
            Some(decimal as u32)
        } else {
            None
        }
    }
}

/// reads a station feed from a JSON file. see [`parse_stations`].
pub fn read_stations(path: &Path) -> Result<Vec<Station>, StationFlowError> {
    log::info!("reading stations from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| {
        StationFlowError::StationDatasetError(path.display().to_string(), e.to_string())
    })?;
    parse_stations(&contents).map_err(|e| {
        StationFlowError::StationDatasetError(path.display().to_string(), e.to_string())
    })
}

/// decodes stations from a JSON document, either a GBFS `station_information`
/// feed (`data.stations`) or a bare list of station records.
///
/// each record is decoded on its own, and a record that fails to decode is
/// skipped with a warning. records missing a `short_name` or a usable lat/lon
/// pair are skipped the same way, as are repeated `short_name` values after
/// the first. a capacity that is not a whole dock count is dropped and the
/// station is kept.
pub fn parse_stations(json: &str) -> Result<Vec<Station>, StationFlowError> {
    let mut document: Value = serde_json::from_str(json)?;
    let records = match document.pointer_mut("/data/stations").map(Value::take) {
        Some(Value::Array(records)) => records,
        Some(_) => {
            return Err(StationFlowError::InvalidStationFeed(String::from(
                "data.stations is not a list",
            )))
        }
        None => match document {
            Value::Array(records) => records,
            _ => {
                return Err(StationFlowError::InvalidStationFeed(String::from(
                    "expected a GBFS station_information document or a list of stations",
                )))
            }
        },
    };
    let n_records = records.len();
    let mut seen: HashSet<String> = HashSet::new();
    let mut stations = Vec::with_capacity(n_records);
    for (idx, value) in records.into_iter().enumerate() {
        let record = match serde_json::from_value::<StationRecord>(value) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("station record {idx} could not be decoded, skipping: {e}");
                continue;
            }
        };
        let short_name = match record.short_name.and_then(StationId::value) {
            Some(s) => s,
            None => {
                log::warn!("station record {idx} has no short_name, skipping");
                continue;
            }
        };
        let position = (
            record.lon.as_ref().and_then(Coordinate::value),
            record.lat.as_ref().and_then(Coordinate::value),
        );
        let (lon, lat) = match position {
            (Some(lon), Some(lat)) => (lon, lat),
            _ => {
                log::warn!("station '{short_name}' has no valid lat/lon, skipping");
                continue;
            }
        };
        if !seen.insert(short_name.clone()) {
            log::warn!("station '{short_name}' appears more than once, keeping the first");
            continue;
        }
        let capacity = record.capacity.as_ref().and_then(Capacity::value);
        if record.capacity.is_some() && capacity.is_none() {
            log::warn!("station '{short_name}' has an unusable capacity, ignoring it");
        }
        let mut station = Station::new(&short_name, lon, lat);
        station.name = record.name;
        station.capacity = capacity;
        stations.push(station);
    }
    log::info!("loaded {} of {} station records", stations.len(), n_records);
    Ok(stations)
}
