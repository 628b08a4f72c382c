use serde::Serialize;
use stationflow_core::model::TimeFilter;

use crate::model::StationMarker;

/// the renderable state of a station map after one recomputation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapFrame {
    pub time_filter: TimeFilter,
    /// text for the selected-time display, `(any time)` when unfiltered
    pub time_label: String,
    /// number of trips that passed the time filter
    pub trip_count: usize,
    pub markers: Vec<StationMarker>,
}
