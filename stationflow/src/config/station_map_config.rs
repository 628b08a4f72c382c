use serde::{Deserialize, Serialize};
use stationflow_core::{
    model::TrafficError,
    ops::TimeWindow,
    scale::RadiusRange,
};

use crate::{config::InvalidTripPolicy, model::StationFlowError};

/// defines behaviors for loading datasets and rendering a station traffic map.
/// any field missing from a configuration file takes its default value.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct StationMapConfiguration {
    /// trips starting or ending within this many minutes of a selected time
    /// are kept
    pub tolerance_minutes: u16,
    /// measure trip time distance around midnight. when false, a selection
    /// of 00:00 does not match a trip at 23:50.
    pub wrap_midnight: bool,
    /// marker radius range used when no time is selected
    pub unfiltered_radius_range: RadiusRange,
    /// marker radius range used while a time is selected
    pub filtered_radius_range: RadiusRange,
    pub invalid_trip_policy: InvalidTripPolicy,
    /// chrono format string for trip timestamps. if omitted, a set of common
    /// ISO-8601 layouts is tried.
    pub timestamp_format: Option<String>,
}

impl Default for StationMapConfiguration {
    fn default() -> Self {
        Self {
            tolerance_minutes: TimeWindow::DEFAULT_TOLERANCE_MINUTES,
            wrap_midnight: false,
            unfiltered_radius_range: RadiusRange::UNFILTERED,
            filtered_radius_range: RadiusRange::FILTERED,
            invalid_trip_policy: InvalidTripPolicy::default(),
            timestamp_format: None,
        }
    }
}

impl StationMapConfiguration {
    pub fn time_window(&self) -> Result<TimeWindow, TrafficError> {
        TimeWindow::new(self.tolerance_minutes, self.wrap_midnight)
    }
}

impl TryFrom<&String> for StationMapConfiguration {
    type Error = StationFlowError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let read = |f: &String| {
            std::fs::read_to_string(f).map_err(|e| {
                StationFlowError::ConfigurationError(format!("failure reading {f}: {e}"))
            })
        };
        let conf: StationMapConfiguration = if f.ends_with(".toml") {
            toml::from_str(&read(f)?).map_err(|e| {
                StationFlowError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            serde_json::from_str(&read(f)?).map_err(|e| {
                StationFlowError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(StationFlowError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.time_window()?;
        Ok(conf)
    }
}
