use std::collections::HashMap;

use itertools::Itertools;

use crate::model::{Station, StationTraffic, Trip};

/// recomputes arrival and departure counts for every station from a set of trips.
///
/// departures are counted by each trip's `start_station_id` and arrivals by its
/// `end_station_id`. previous counts on the stations are overwritten. trips that
/// reference a station id not found in `stations` are counted but never matched,
/// so they have no effect on the result.
///
/// # Arguments
///
/// * `stations` - stations to annotate in place, order is preserved
/// * `trips`    - the (possibly time-filtered) trips to count
pub fn compute_station_traffic<'a, I>(stations: &mut [Station], trips: I)
where
    I: IntoIterator<Item = &'a Trip>,
{
    let trips = trips.into_iter().collect_vec();
    let departures: HashMap<&str, usize> = trips
        .iter()
        .map(|t| t.start_station_id.as_str())
        .counts();
    let arrivals: HashMap<&str, usize> = trips
        .iter()
        .map(|t| t.end_station_id.as_str())
        .counts();

    for station in stations.iter_mut() {
        let id = station.short_name.as_str();
        let n_arrivals = arrivals.get(id).copied().unwrap_or_default();
        let n_departures = departures.get(id).copied().unwrap_or_default();
        station.traffic = StationTraffic::new(n_arrivals as u64, n_departures as u64);
    }

    log::debug!(
        "computed traffic for {} stations from {} trips",
        stations.len(),
        trips.len()
    );
}

/// largest total traffic across all stations, or 0 for an empty slice.
pub fn max_total_traffic(stations: &[Station]) -> u64 {
    stations
        .iter()
        .map(|s| s.traffic.total_traffic())
        .max()
        .unwrap_or_default()
}
