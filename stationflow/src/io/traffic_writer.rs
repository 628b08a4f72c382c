use std::io::Write;

use serde::Serialize;
use stationflow_core::model::Station;

use crate::model::StationFlowError;

#[derive(Serialize)]
struct StationTrafficRow<'a> {
    short_name: &'a str,
    name: Option<&'a str>,
    lat: f64,
    lon: f64,
    arrivals: u64,
    departures: u64,
    total_traffic: u64,
}

impl<'a> From<&'a Station> for StationTrafficRow<'a> {
    fn from(station: &'a Station) -> Self {
        StationTrafficRow {
            short_name: &station.short_name,
            name: station.name.as_deref(),
            lat: station.lat(),
            lon: station.lon(),
            arrivals: station.traffic.arrivals(),
            departures: station.traffic.departures(),
            total_traffic: station.traffic.total_traffic(),
        }
    }
}

/// writes one CSV row per station with its current traffic counts.
///
/// # Arguments
///
/// * `writer`      - destination, e.g. a file or stdout
/// * `destination` - name of the destination used in error messages
/// * `stations`    - annotated stations to write
pub fn write_station_traffic<W: Write>(
    writer: W,
    destination: &str,
    stations: &[Station],
) -> Result<(), StationFlowError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for station in stations.iter() {
        csv_writer
            .serialize(StationTrafficRow::from(station))
            .map_err(|e| StationFlowError::CsvWriteError(destination.to_string(), e))?;
    }
    csv_writer.flush()?;
    Ok(())
}
