mod marker_writer;
mod station_reader;
mod traffic_writer;
mod trip_reader;

pub use marker_writer::{marker_feature_collection, GeoJsonMarkerWriter};
pub use station_reader::{parse_stations, read_stations};
pub use traffic_writer::write_station_traffic;
pub use trip_reader::{parse_timestamp, read_trips, read_trips_from_csv};
