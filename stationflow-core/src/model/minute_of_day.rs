use std::fmt::Display;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::TrafficError;

/// a wall-clock time of day at minute resolution, stored as minutes since
/// midnight in [0, 1439].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    pub const MINUTES_PER_DAY: u16 = 1440;
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);

    pub fn new(minutes: u16) -> Result<MinuteOfDay, TrafficError> {
        if minutes < Self::MINUTES_PER_DAY {
            Ok(MinuteOfDay(minutes))
        } else {
            Err(TrafficError::InvalidTimeFilter(minutes as i64))
        }
    }

    /// hour * 60 + minute of the timestamp. the date and seconds are ignored.
    pub fn from_datetime(datetime: &NaiveDateTime) -> MinuteOfDay {
        MinuteOfDay((datetime.hour() * 60 + datetime.minute()) as u16)
    }

    /// parses a 24-hour clock value such as `08:30` or `17:05`.
    pub fn parse_clock(s: &str) -> Result<MinuteOfDay, TrafficError> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|e| TrafficError::TimeFilterParseError(s.to_string(), e.to_string()))?;
        Ok(MinuteOfDay((time.hour() * 60 + time.minute()) as u16))
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// absolute minute difference between two times of day.
    ///
    /// when `wrap_midnight` is false the distance is linear, so 23:50 and 00:00
    /// are 1430 minutes apart. when true, the shorter way around the clock is
    /// used and those two times are 10 minutes apart.
    pub fn distance(&self, other: &MinuteOfDay, wrap_midnight: bool) -> u16 {
        let linear = self.0.abs_diff(other.0);
        if wrap_midnight {
            linear.min(Self::MINUTES_PER_DAY - linear)
        } else {
            linear
        }
    }

    /// renders as a 12-hour clock value, e.g. `10:00 AM` or `12:05 PM`.
    pub fn format_12h(&self) -> String {
        let hour = self.hour();
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        let hour_12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour_12, self.minute(), meridiem)
    }
}

impl TryFrom<i64> for MinuteOfDay {
    type Error = TrafficError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..Self::MINUTES_PER_DAY as i64).contains(&value) {
            Ok(MinuteOfDay(value as u16))
        } else {
            Err(TrafficError::InvalidTimeFilter(value))
        }
    }
}

impl From<MinuteOfDay> for u16 {
    fn from(value: MinuteOfDay) -> Self {
        value.0
    }
}

impl Display for MinuteOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
