use serde::{Deserialize, Serialize};

use crate::model::StationTraffic;

/// three-way quantization of a station's departure ratio, used to color
/// departure-heavy and arrival-heavy stations.
///
/// the ratio domain [0, 1] is split into equal thirds. ratios below 0 or
/// above 1 fall into the first or last bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowBucket {
    ArrivalHeavy,
    Balanced,
    DepartureHeavy,
}

impl FlowBucket {
    /// undefined ratios (NaN) map to [`FlowBucket::Balanced`].
    pub fn from_ratio(ratio: f64) -> FlowBucket {
        if ratio.is_nan() {
            FlowBucket::Balanced
        } else if ratio < 1.0 / 3.0 {
            FlowBucket::ArrivalHeavy
        } else if ratio < 2.0 / 3.0 {
            FlowBucket::Balanced
        } else {
            FlowBucket::DepartureHeavy
        }
    }

    /// a station with no traffic is [`FlowBucket::Balanced`].
    pub fn from_traffic(traffic: &StationTraffic) -> FlowBucket {
        traffic
            .departure_ratio()
            .map(FlowBucket::from_ratio)
            .unwrap_or(FlowBucket::Balanced)
    }

    /// numeric value of the bucket: 0, 0.5 or 1.
    pub fn value(&self) -> f64 {
        match self {
            FlowBucket::ArrivalHeavy => 0.0,
            FlowBucket::Balanced => 0.5,
            FlowBucket::DepartureHeavy => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(FlowBucket::from_ratio(0.0), FlowBucket::ArrivalHeavy);
        assert_eq!(FlowBucket::from_ratio(0.33), FlowBucket::ArrivalHeavy);
        assert_eq!(FlowBucket::from_ratio(1.0 / 3.0), FlowBucket::Balanced);
        assert_eq!(FlowBucket::from_ratio(0.5), FlowBucket::Balanced);
        assert_eq!(FlowBucket::from_ratio(2.0 / 3.0), FlowBucket::DepartureHeavy);
        assert_eq!(FlowBucket::from_ratio(1.0), FlowBucket::DepartureHeavy);
        assert_eq!(FlowBucket::from_ratio(f64::NAN), FlowBucket::Balanced);
    }

    #[test]
    fn test_no_traffic_is_balanced() {
        let bucket = FlowBucket::from_traffic(&StationTraffic::default());
        assert_eq!(bucket, FlowBucket::Balanced);
        assert_eq!(bucket.value(), 0.5);
    }

    #[test]
    fn test_from_traffic() {
        let departing = FlowBucket::from_traffic(&StationTraffic::new(1, 9));
        let arriving = FlowBucket::from_traffic(&StationTraffic::new(9, 1));
        assert_eq!(departing.value(), 1.0);
        assert_eq!(arriving.value(), 0.0);
    }
}
