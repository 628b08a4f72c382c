use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrafficError {
    #[error("time filter must be -1 (any time) or minutes since midnight in [0, 1439], found {0}")]
    InvalidTimeFilter(i64),
    #[error("unable to parse time filter from '{0}': {1}")]
    TimeFilterParseError(String, String),
    #[error("radius range must be finite and non-negative, found [{0}, {1}]")]
    InvalidRadiusRange(f64, f64),
    #[error("tolerance window must be in [0, 1439] minutes, found {0}")]
    InvalidTolerance(u16),
}
