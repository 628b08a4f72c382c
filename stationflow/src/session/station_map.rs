use stationflow_core::{
    model::{Station, TimeFilter, Trip},
    ops::{compute_station_traffic, filter_trips_by_time, max_total_traffic, TimeWindow},
    scale::{RadiusRange, RadiusScale},
};

use super::{FrameListener, MapEvent, MapFrame};
use crate::{
    config::StationMapConfiguration,
    model::{StationFlowError, StationMarker},
};

/// owns the station and trip datasets of one map and recomputes station
/// traffic whenever the time selection changes.
///
/// the radius scale domain is fixed at construction from the unfiltered
/// traffic. selecting a time only swaps the output range, so filtered
/// markers are drawn relative to the busiest station over all trips.
pub struct StationMap {
    stations: Vec<Station>,
    trips: Vec<Trip>,
    window: TimeWindow,
    radius_scale: RadiusScale,
    unfiltered_range: RadiusRange,
    filtered_range: RadiusRange,
    time_filter: TimeFilter,
    trip_count: usize,
    listeners: Vec<Box<dyn FrameListener>>,
}

impl StationMap {
    pub fn new(
        stations: Vec<Station>,
        trips: Vec<Trip>,
        conf: &StationMapConfiguration,
    ) -> Result<StationMap, StationFlowError> {
        let window = conf.time_window()?;
        let mut stations = stations;
        compute_station_traffic(&mut stations, &trips);
        let domain_max = max_total_traffic(&stations);
        log::info!(
            "station map with {} stations, {} trips, max station traffic {}",
            stations.len(),
            trips.len(),
            domain_max
        );
        let trip_count = trips.len();
        Ok(StationMap {
            stations,
            trips,
            window,
            radius_scale: RadiusScale::new(domain_max, conf.unfiltered_radius_range),
            unfiltered_range: conf.unfiltered_radius_range,
            filtered_range: conf.filtered_radius_range,
            time_filter: TimeFilter::Any,
            trip_count,
            listeners: vec![],
        })
    }

    /// registers a listener that is notified of every frame from now on.
    pub fn subscribe(&mut self, listener: Box<dyn FrameListener>) {
        self.listeners.push(listener);
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn time_filter(&self) -> TimeFilter {
        self.time_filter
    }

    /// the radius scale for the current selection
    pub fn radius_scale(&self) -> RadiusScale {
        self.radius_scale
    }

    /// applies an event, notifies all listeners and returns the new frame.
    pub fn handle(&mut self, event: MapEvent) -> Result<MapFrame, StationFlowError> {
        match event {
            MapEvent::TimeSelected { value } => {
                let filter = TimeFilter::try_from(value)?;
                self.select_time(filter)
            }
            MapEvent::Refresh => {
                let frame = self.frame();
                self.notify(&frame)?;
                Ok(frame)
            }
        }
    }

    /// filters trips to the selected time, recomputes station traffic from the
    /// surviving trips, then notifies all listeners of the new frame.
    pub fn select_time(&mut self, filter: TimeFilter) -> Result<MapFrame, StationFlowError> {
        let filtered = filter_trips_by_time(&self.trips, &filter, &self.window);
        self.trip_count = filtered.len();
        compute_station_traffic(&mut self.stations, filtered);

        let range = if filter.is_active() {
            self.filtered_range
        } else {
            self.unfiltered_range
        };
        self.radius_scale = self.radius_scale.with_range(range);
        self.time_filter = filter;
        log::debug!(
            "selected time {} with {} matching trips",
            filter,
            self.trip_count
        );

        let frame = self.frame();
        self.notify(&frame)?;
        Ok(frame)
    }

    /// markers for the current selection, in station order.
    pub fn markers(&self) -> Vec<StationMarker> {
        self.stations
            .iter()
            .map(|s| StationMarker::new(s, &self.radius_scale))
            .collect()
    }

    pub fn frame(&self) -> MapFrame {
        MapFrame {
            time_filter: self.time_filter,
            time_label: self.time_filter.to_string(),
            trip_count: self.trip_count,
            markers: self.markers(),
        }
    }

    fn notify(&mut self, frame: &MapFrame) -> Result<(), StationFlowError> {
        for listener in self.listeners.iter_mut() {
            listener.on_frame(frame)?;
        }
        Ok(())
    }
}
