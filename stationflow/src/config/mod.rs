mod invalid_trip_policy;
mod station_map_config;

pub use invalid_trip_policy::InvalidTripPolicy;
pub use station_map_config::StationMapConfiguration;
