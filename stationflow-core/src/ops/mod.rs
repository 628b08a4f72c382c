mod filter_ops;
mod time_window;
mod traffic_ops;

pub use filter_ops::filter_trips_by_time;
pub use time_window::TimeWindow;
pub use traffic_ops::{compute_station_traffic, max_total_traffic};
