use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use kdam::tqdm;
use serde::Deserialize;
use stationflow_core::model::Trip;

use crate::{
    config::{InvalidTripPolicy, StationMapConfiguration},
    model::StationFlowError,
};

/// timestamp layouts tried in order when no explicit format is configured
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// the columns of a trip CSV used by stationflow. other columns are ignored.
#[derive(Deserialize)]
struct TripRow {
    start_station_id: Option<String>,
    end_station_id: Option<String>,
    started_at: Option<String>,
    ended_at: Option<String>,
}

/// reads a trip CSV file with a header row. rows that cannot be turned into a
/// [`Trip`] are handled according to the configured [`InvalidTripPolicy`].
pub fn read_trips(
    path: &Path,
    conf: &StationMapConfiguration,
) -> Result<Vec<Trip>, StationFlowError> {
    log::info!("reading trips from {}", path.display());
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| {
            StationFlowError::TripDatasetError(path.display().to_string(), e.to_string())
        })?;
    read_trips_from_csv(reader, &path.display().to_string(), conf)
}

/// reads trips from an open CSV reader. `source` names the dataset in errors
/// and log messages. see [`read_trips`].
///
/// rows the CSV decoder rejects, such as rows with a missing column, go
/// through the same [`InvalidTripPolicy`] as rows with unusable values. only
/// I/O failures end the read regardless of the policy.
pub fn read_trips_from_csv<R: std::io::Read>(
    reader: csv::Reader<R>,
    source: &str,
    conf: &StationMapConfiguration,
) -> Result<Vec<Trip>, StationFlowError> {
    let timestamp_format = conf.timestamp_format.as_deref();
    let row_iter = tqdm!(reader.into_deserialize::<TripRow>(), desc = "reading trips");
    let mut trips = vec![];
    let mut n_dropped = 0;
    for (idx, row_result) in row_iter.enumerate() {
        let row_number = idx as u64 + 1;
        let trip_result = match row_result {
            Ok(row) => trip_from_row(row, timestamp_format),
            Err(e) if e.is_io_error() => {
                return Err(StationFlowError::TripDatasetError(
                    source.to_string(),
                    e.to_string(),
                ))
            }
            Err(e) => Err(e.to_string()),
        };
        match trip_result {
            Ok(trip) => trips.push(trip),
            Err(msg) => match conf.invalid_trip_policy {
                InvalidTripPolicy::Fail => {
                    return Err(StationFlowError::InvalidTrip(
                        source.to_string(),
                        row_number,
                        msg,
                    ))
                }
                InvalidTripPolicy::DropTrip => {
                    log::warn!("dropping trip in {source} on row {row_number}: {msg}");
                    n_dropped += 1;
                }
            },
        }
    }
    eprintln!();
    log::info!("loaded {} trips, dropped {} invalid rows", trips.len(), n_dropped);
    Ok(trips)
}

fn trip_from_row(row: TripRow, timestamp_format: Option<&str>) -> Result<Trip, String> {
    let start_station_id = row
        .start_station_id
        .ok_or_else(|| String::from("missing start_station_id"))?;
    let end_station_id = row
        .end_station_id
        .ok_or_else(|| String::from("missing end_station_id"))?;
    let started_at = row
        .started_at
        .ok_or_else(|| String::from("missing started_at"))
        .and_then(|s| parse_timestamp(&s, timestamp_format))?;
    let ended_at = row
        .ended_at
        .ok_or_else(|| String::from("missing ended_at"))
        .and_then(|s| parse_timestamp(&s, timestamp_format))?;
    Ok(Trip {
        start_station_id,
        end_station_id,
        started_at,
        ended_at,
    })
}

/// parses a wall-clock timestamp. an explicit format is used exclusively when
/// given. otherwise the common layouts are tried, then RFC 3339, which keeps
/// the local time and discards the offset.
pub fn parse_timestamp(s: &str, format: Option<&str>) -> Result<NaiveDateTime, String> {
    if let Some(fmt) = format {
        return NaiveDateTime::parse_from_str(s, fmt)
            .map_err(|e| format!("timestamp '{s}' does not match format '{fmt}': {e}"));
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .ok_or_else(|| format!("unable to parse timestamp '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_trips_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("resources")
            .join("test_trips.csv")
    }

    #[test]
    fn test_read_trips_drops_invalid_rows() {
        let conf = StationMapConfiguration::default();
        let trips = read_trips(&test_trips_path(), &conf).expect("failed to read test trips");
        assert_eq!(trips.len(), 5);
        assert_eq!(trips[0].start_station_id, "A32000");
        assert_eq!(trips[0].end_station_id, "M32006");
        assert_eq!(trips[0].started_minute().minutes(), 480);
        assert_eq!(trips[4].end_station_id, "Z99999");
        assert_eq!(trips[4].ended_minute().minutes(), 4);
    }

    #[test]
    fn test_read_trips_fail_policy() {
        let conf = StationMapConfiguration {
            invalid_trip_policy: InvalidTripPolicy::Fail,
            ..Default::default()
        };
        let path = test_trips_path();
        match read_trips(&path, &conf) {
            Err(StationFlowError::InvalidTrip(source, row, _)) => {
                assert_eq!(source, path.display().to_string());
                assert_eq!(row, 6);
            }
            other => panic!("expected an invalid trip error, found {other:?}"),
        }
    }

    const SHORT_ROW_CSV: &str = "start_station_id,end_station_id,started_at,ended_at\n\
                                 A,B,2024-03-01 10:30:00,2024-03-01 10:45:00\n\
                                 A,B,2024-03-01 11:30:00\n\
                                 B,A,2024-03-01 12:30:00,2024-03-01 12:45:00\n";

    #[test]
    fn test_short_row_is_dropped_by_default() {
        let conf = StationMapConfiguration::default();
        let reader = csv::Reader::from_reader(SHORT_ROW_CSV.as_bytes());
        let trips =
            read_trips_from_csv(reader, "short_row.csv", &conf).expect("test invariant failed");
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].start_station_id, "A");
        assert_eq!(trips[1].start_station_id, "B");
    }

    #[test]
    fn test_short_row_fails_under_fail_policy() {
        let conf = StationMapConfiguration {
            invalid_trip_policy: InvalidTripPolicy::Fail,
            ..Default::default()
        };
        let reader = csv::Reader::from_reader(SHORT_ROW_CSV.as_bytes());
        let result = read_trips_from_csv(reader, "short_row.csv", &conf);
        assert!(matches!(
            result,
            Err(StationFlowError::InvalidTrip(ref source, 2, _)) if source == "short_row.csv"
        ));
    }

    #[test]
    fn test_explicit_timestamp_format() {
        let data = "start_station_id,end_station_id,started_at,ended_at\n\
                    A,B,03/01/2024 10:30,03/01/2024 10:45\n";
        let conf = StationMapConfiguration {
            timestamp_format: Some(String::from("%m/%d/%Y %H:%M")),
            invalid_trip_policy: InvalidTripPolicy::Fail,
            ..Default::default()
        };
        let reader = csv::Reader::from_reader(data.as_bytes());
        let trips =
            read_trips_from_csv(reader, "inline.csv", &conf).expect("test invariant failed");
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].started_minute().minutes(), 630);
    }

    #[test]
    fn test_parse_timestamp_layouts() {
        let expected = NaiveDateTime::parse_from_str("2024-03-01 10:30:00", "%Y-%m-%d %H:%M:%S")
            .expect("test invariant failed");
        for s in [
            "2024-03-01 10:30:00",
            "2024-03-01 10:30:00.000",
            "2024-03-01T10:30:00",
            "2024-03-01 10:30",
            "2024-03-01T10:30:00-05:00",
        ] {
            assert_eq!(parse_timestamp(s, None), Ok(expected), "{s}");
        }
        assert!(parse_timestamp("yesterday", None).is_err());
    }
}
