use serde::{Deserialize, Serialize};

use crate::model::TrafficError;

/// output range of a [`super::RadiusScale`] in pixels. serialized as a
/// two-element array `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct RadiusRange {
    min: f64,
    max: f64,
}

impl RadiusRange {
    /// range used when all trips are shown
    pub const UNFILTERED: RadiusRange = RadiusRange {
        min: 0.0,
        max: 25.0,
    };
    /// range used when a time filter is active
    pub const FILTERED: RadiusRange = RadiusRange {
        min: 3.0,
        max: 50.0,
    };

    pub fn new(min: f64, max: f64) -> Result<RadiusRange, TrafficError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if valid(min) && valid(max) {
            Ok(RadiusRange { min, max })
        } else {
            Err(TrafficError::InvalidRadiusRange(min, max))
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// linear interpolation across the range with `t` in [0, 1].
    pub fn interpolate(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t
    }
}

impl TryFrom<[f64; 2]> for RadiusRange {
    type Error = TrafficError;

    fn try_from(value: [f64; 2]) -> Result<Self, Self::Error> {
        RadiusRange::new(value[0], value[1])
    }
}

impl From<RadiusRange> for [f64; 2] {
    fn from(value: RadiusRange) -> Self {
        [value.min, value.max]
    }
}
