mod minute_of_day;
mod station;
mod station_traffic;
mod time_filter;
mod traffic_error;
mod trip;

pub use minute_of_day::MinuteOfDay;
pub use station::Station;
pub use station_traffic::StationTraffic;
pub use time_filter::TimeFilter;
pub use traffic_error::TrafficError;
pub use trip::Trip;
