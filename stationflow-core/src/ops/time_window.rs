use serde::{Deserialize, Serialize};

use crate::model::{MinuteOfDay, TrafficError, Trip};

/// tolerance window used when matching trips to a target time of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// trips starting or ending within this many minutes of the target are
    /// kept. the bound is inclusive.
    pub tolerance_minutes: u16,
    /// if true, distances are measured around the clock so that 23:50 is
    /// 10 minutes from 00:00. off by default, which keeps the linear
    /// minute distance and drops trips on the far side of midnight.
    pub wrap_midnight: bool,
}

impl TimeWindow {
    pub const DEFAULT_TOLERANCE_MINUTES: u16 = 60;

    pub fn new(tolerance_minutes: u16, wrap_midnight: bool) -> Result<TimeWindow, TrafficError> {
        if tolerance_minutes >= MinuteOfDay::MINUTES_PER_DAY {
            return Err(TrafficError::InvalidTolerance(tolerance_minutes));
        }
        Ok(TimeWindow {
            tolerance_minutes,
            wrap_midnight,
        })
    }

    /// true if the trip started or ended within the tolerance of the target.
    pub fn contains(&self, target: &MinuteOfDay, trip: &Trip) -> bool {
        let started = trip.started_minute().distance(target, self.wrap_midnight);
        let ended = trip.ended_minute().distance(target, self.wrap_midnight);
        started <= self.tolerance_minutes || ended <= self.tolerance_minutes
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            tolerance_minutes: Self::DEFAULT_TOLERANCE_MINUTES,
            wrap_midnight: false,
        }
    }
}
