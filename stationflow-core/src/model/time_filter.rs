use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{MinuteOfDay, TrafficError};

/// a time-of-day selection over a trip dataset. serialized as the integer
/// `-1` for [`TimeFilter::Any`] or minutes since midnight otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TimeFilter {
    /// no filtering, all trips are kept
    #[default]
    Any,
    /// keep trips that start or end near this time of day
    At(MinuteOfDay),
}

impl TimeFilter {
    /// sentinel integer value for "no filtering"
    pub const ANY_TIME: i64 = -1;

    pub fn is_active(&self) -> bool {
        matches!(self, TimeFilter::At(_))
    }

    /// short label usable in file names, `any` or `HHMM`.
    pub fn label(&self) -> String {
        match self {
            TimeFilter::Any => String::from("any"),
            TimeFilter::At(m) => format!("{:02}{:02}", m.hour(), m.minute()),
        }
    }
}

impl TryFrom<i64> for TimeFilter {
    type Error = TrafficError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == Self::ANY_TIME {
            Ok(TimeFilter::Any)
        } else {
            MinuteOfDay::try_from(value).map(TimeFilter::At)
        }
    }
}

impl TryFrom<i32> for TimeFilter {
    type Error = TrafficError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        TimeFilter::try_from(value as i64)
    }
}

impl From<TimeFilter> for i64 {
    fn from(value: TimeFilter) -> Self {
        match value {
            TimeFilter::Any => TimeFilter::ANY_TIME,
            TimeFilter::At(m) => m.minutes() as i64,
        }
    }
}

/// accepts `-1`, `any`, an integer minute count in [0, 1439], or a 24-hour
/// clock value `HH:MM`.
impl FromStr for TimeFilter {
    type Err = TrafficError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("any") {
            return Ok(TimeFilter::Any);
        }
        if trimmed.contains(':') {
            return MinuteOfDay::parse_clock(trimmed).map(TimeFilter::At);
        }
        let value = trimmed
            .parse::<i64>()
            .map_err(|e| TrafficError::TimeFilterParseError(s.to_string(), e.to_string()))?;
        TimeFilter::try_from(value)
    }
}

impl Display for TimeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFilter::Any => write!(f, "(any time)"),
            TimeFilter::At(m) => write!(f, "{}", m.format_12h()),
        }
    }
}
