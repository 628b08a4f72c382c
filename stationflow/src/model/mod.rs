mod station_marker;
mod stationflow_error;

pub use station_marker::StationMarker;
pub use stationflow_error::StationFlowError;
