use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::MinuteOfDay;

/// a single bike rental. station ids refer to [`super::Station::short_name`]
/// but are not required to match any known station. timestamps are local
/// wall-clock times and a trip may cross midnight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub start_station_id: String,
    pub end_station_id: String,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}

impl Trip {
    pub fn new(
        start_station_id: &str,
        end_station_id: &str,
        started_at: NaiveDateTime,
        ended_at: NaiveDateTime,
    ) -> Trip {
        Trip {
            start_station_id: start_station_id.to_string(),
            end_station_id: end_station_id.to_string(),
            started_at,
            ended_at,
        }
    }

    pub fn started_minute(&self) -> MinuteOfDay {
        MinuteOfDay::from_datetime(&self.started_at)
    }

    pub fn ended_minute(&self) -> MinuteOfDay {
        MinuteOfDay::from_datetime(&self.ended_at)
    }
}
