//! station traffic aggregation and time-of-day trip filtering for bike-share
//! station and trip datasets.
//!
//! the typical pipeline narrows the trip list with [`ops::filter_trips_by_time`]
//! and then recomputes per-station counts with [`ops::compute_station_traffic`].
//! the [`scale`] module maps the resulting counts to marker sizes and colors.
pub mod model;
pub mod ops;
pub mod scale;
